//! Batting dataset row shape.

use serde::Deserialize;
use sqlx::SqlitePool;

/// Maps to a row from Lahman's Batting.csv file.
///
/// All fields are raw text, bound to CSV columns by header name.
/// Field names are the Lahman column codes.
#[allow(missing_docs)]
#[derive(Debug, Clone, Deserialize)]
pub struct BattingRow {
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "yearID")]
    pub year_id: String,
    #[serde(rename = "stint")]
    pub stint: String,
    #[serde(rename = "teamID")]
    pub team_id: String,
    #[serde(rename = "lgID")]
    pub lg_id: String,
    #[serde(rename = "G")]
    pub g: String,
    #[serde(rename = "AB")]
    pub ab: String,
    #[serde(rename = "R")]
    pub r: String,
    #[serde(rename = "H")]
    pub h: String,
    #[serde(rename = "2B")]
    pub h2b: String,
    #[serde(rename = "3B")]
    pub h3b: String,
    #[serde(rename = "HR")]
    pub hr: String,
    #[serde(rename = "RBI")]
    pub rbi: String,
    #[serde(rename = "SB")]
    pub sb: String,
    #[serde(rename = "CS")]
    pub cs: String,
    #[serde(rename = "BB")]
    pub bb: String,
    #[serde(rename = "SO")]
    pub so: String,
    #[serde(rename = "IBB")]
    pub ibb: String,
    #[serde(rename = "HBP")]
    pub hbp: String,
    #[serde(rename = "SH")]
    pub sh: String,
    #[serde(rename = "SF")]
    pub sf: String,
    #[serde(rename = "GIDP")]
    pub gidp: String,
}

impl BattingRow {
    /// Inserts this row into the Batting table.
    pub async fn persist(&self, pool: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query(
            "INSERT INTO Batting (\
                PlayerID, YearID, Stint, TeamID, LgID, G, AB, R, H, H2B, H3B, \
                HR, RBI, SB, CS, BB, SO, IBB, HBP, SH, SF, GIDP\
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&self.player_id)
        .bind(&self.year_id)
        .bind(&self.stint)
        .bind(&self.team_id)
        .bind(&self.lg_id)
        .bind(&self.g)
        .bind(&self.ab)
        .bind(&self.r)
        .bind(&self.h)
        .bind(&self.h2b)
        .bind(&self.h3b)
        .bind(&self.hr)
        .bind(&self.rbi)
        .bind(&self.sb)
        .bind(&self.cs)
        .bind(&self.bb)
        .bind(&self.so)
        .bind(&self.ibb)
        .bind(&self.hbp)
        .bind(&self.sh)
        .bind(&self.sf)
        .bind(&self.gidp)
        .execute(pool)
        .await?;
        Ok(())
    }
}
