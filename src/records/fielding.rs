//! Fielding dataset row shape.

use serde::Deserialize;
use sqlx::SqlitePool;

/// Maps to a row from Lahman's Fielding.csv file.
///
/// All fields are raw text, bound to CSV columns by header name.
/// Field names are the Lahman column codes.
#[allow(missing_docs)]
#[derive(Debug, Clone, Deserialize)]
pub struct FieldingRow {
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
    #[serde(rename = "POS")]
    pub pos: String,
    #[serde(rename = "G")]
    pub g: String,
    #[serde(rename = "GS")]
    pub gs: String,
    #[serde(rename = "InnOuts")]
    pub inn_outs: String,
    #[serde(rename = "PO")]
    pub po: String,
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "E")]
    pub e: String,
    #[serde(rename = "DP")]
    pub dp: String,
    #[serde(rename = "PB")]
    pub pb: String,
    #[serde(rename = "WP")]
    pub wp: String,
    #[serde(rename = "SB")]
    pub sb: String,
    #[serde(rename = "CS")]
    pub cs: String,
    #[serde(rename = "ZR")]
    pub zr: String,
}

impl FieldingRow {
    /// Inserts this row into the Fielding table.
    pub async fn persist(&self, pool: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query(
            "INSERT INTO Fielding (\
                PlayerID, YearID, Stint, TeamID, LGID, POS, G, GS, InnOuts, \
                PO, A, E, DP, PB, WP, SB, CS, ZR\
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&self.player_id)
        .bind(&self.year_id)
        .bind(&self.stint)
        .bind(&self.team_id)
        .bind(&self.lg_id)
        .bind(&self.pos)
        .bind(&self.g)
        .bind(&self.gs)
        .bind(&self.inn_outs)
        .bind(&self.po)
        .bind(&self.a)
        .bind(&self.e)
        .bind(&self.dp)
        .bind(&self.pb)
        .bind(&self.wp)
        .bind(&self.sb)
        .bind(&self.cs)
        .bind(&self.zr)
        .execute(pool)
        .await?;
        Ok(())
    }
}
