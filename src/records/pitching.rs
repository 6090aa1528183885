//! Pitching dataset row shape.

use serde::Deserialize;
use sqlx::SqlitePool;

/// Maps to a row from Lahman's Pitching.csv file.
///
/// All fields are raw text, bound to CSV columns by header name.
/// Field names are the Lahman column codes.
#[allow(missing_docs)]
#[derive(Debug, Clone, Deserialize)]
pub struct PitchingRow {
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
    #[serde(rename = "W")]
    pub w: String,
    #[serde(rename = "L")]
    pub l: String,
    #[serde(rename = "G")]
    pub g: String,
    #[serde(rename = "GS")]
    pub gs: String,
    #[serde(rename = "CG")]
    pub cg: String,
    #[serde(rename = "SHO")]
    pub sho: String,
    #[serde(rename = "SV")]
    pub sv: String,
    #[serde(rename = "IPouts")]
    pub ipouts: String,
    #[serde(rename = "H")]
    pub h: String,
    #[serde(rename = "ER")]
    pub er: String,
    #[serde(rename = "HR")]
    pub hr: String,
    #[serde(rename = "BB")]
    pub bb: String,
    #[serde(rename = "SO")]
    pub so: String,
    #[serde(rename = "BAOpp")]
    pub baopp: String,
    #[serde(rename = "ERA")]
    pub era: String,
    #[serde(rename = "IBB")]
    pub ibb: String,
    #[serde(rename = "WP")]
    pub wp: String,
    #[serde(rename = "HBP")]
    pub hbp: String,
    #[serde(rename = "BK")]
    pub bk: String,
    #[serde(rename = "BFP")]
    pub bfp: String,
    #[serde(rename = "GF")]
    pub gf: String,
    #[serde(rename = "R")]
    pub r: String,
    #[serde(rename = "SH")]
    pub sh: String,
    #[serde(rename = "SF")]
    pub sf: String,
    #[serde(rename = "GIDP")]
    pub gidp: String,
}

impl PitchingRow {
    /// Inserts this row into the Pitching table.
    pub async fn persist(&self, pool: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query(
            "INSERT INTO Pitching (\
                PlayerID, YearID, Stint, TeamID, LGID, W, L, G, GS, CG, SHO, SV, \
                IPouts, H, ER, HR, BB, SO, BAOpp, ERA, IBB, WP, HBP, BK, BFP, GF, \
                R, SH, SF, GIDP\
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, \
                      ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&self.player_id)
        .bind(&self.year_id)
        .bind(&self.stint)
        .bind(&self.team_id)
        .bind(&self.lg_id)
        .bind(&self.w)
        .bind(&self.l)
        .bind(&self.g)
        .bind(&self.gs)
        .bind(&self.cg)
        .bind(&self.sho)
        .bind(&self.sv)
        .bind(&self.ipouts)
        .bind(&self.h)
        .bind(&self.er)
        .bind(&self.hr)
        .bind(&self.bb)
        .bind(&self.so)
        .bind(&self.baopp)
        .bind(&self.era)
        .bind(&self.ibb)
        .bind(&self.wp)
        .bind(&self.hbp)
        .bind(&self.bk)
        .bind(&self.bfp)
        .bind(&self.gf)
        .bind(&self.r)
        .bind(&self.sh)
        .bind(&self.sf)
        .bind(&self.gidp)
        .execute(pool)
        .await?;
        Ok(())
    }
}
