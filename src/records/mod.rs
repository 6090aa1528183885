//! Typed records for the three Lahman datasets and their persist capability.
//!
//! Each row shape mirrors its source CSV columns one-to-one as raw text; nothing
//! is parsed, coerced or validated on the way through. A record persists itself
//! with a single positional parameterized INSERT into its variant's table, and
//! the store's error is returned verbatim on failure.

mod batting;
mod fielding;
mod pitching;

pub use batting::BattingRow;
pub use fielding::FieldingRow;
pub use pitching::PitchingRow;

use sqlx::SqlitePool;

/// One record of any dataset, as carried through the bulk queue.
///
/// A sum type rather than a trait object: dispatch stays static, and the futures
/// produced by `persist` remain `Send` for free inside spawned worker tasks.
#[derive(Debug, Clone)]
pub enum Record {
    /// A row of Batting.csv.
    Batting(BattingRow),
    /// A row of Pitching.csv.
    Pitching(PitchingRow),
    /// A row of Fielding.csv.
    Fielding(FieldingRow),
}

impl Record {
    /// Persists this record into its table with one parameterized INSERT.
    pub async fn persist(&self, pool: &SqlitePool) -> sqlx::Result<()> {
        match self {
            Record::Batting(row) => row.persist(pool).await,
            Record::Pitching(row) => row.persist(pool).await,
            Record::Fielding(row) => row.persist(pool).await,
        }
    }

    /// Destination table name for this record's variant.
    pub fn table(&self) -> &'static str {
        match self {
            Record::Batting(_) => "Batting",
            Record::Pitching(_) => "Pitching",
            Record::Fielding(_) => "Fielding",
        }
    }
}

impl From<BattingRow> for Record {
    fn from(row: BattingRow) -> Self {
        Record::Batting(row)
    }
}

impl From<PitchingRow> for Record {
    fn from(row: PitchingRow) -> Self {
        Record::Pitching(row)
    }
}

impl From<FieldingRow> for Record {
    fn from(row: FieldingRow) -> Self {
        Record::Fielding(row)
    }
}
