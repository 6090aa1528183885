//! Destructive schema bootstrap for the three destination tables.
//!
//! Every trial starts by dropping and recreating Batting, Pitching and Fielding.
//! All columns are text: the benchmark measures insert throughput, not the
//! store's type handling, so values pass through unparsed.

use std::time::Duration;

use log::info;
use sqlx::SqlitePool;

use crate::error_handling::StoreError;

/// DDL statements run in order by `bootstrap_schema`.
///
/// One statement per query: sqlx prepares statements individually, so the
/// drop/create pairs cannot be batched into a single script.
const BOOTSTRAP_STATEMENTS: &[&str] = &[
    "DROP TABLE IF EXISTS Batting",
    "CREATE TABLE Batting (
        PlayerID text,
        YearID text,
        Stint text,
        TeamID text,
        LgID text,
        G text,
        AB text,
        R text,
        H text,
        H2B text,
        H3B text,
        HR text,
        RBI text,
        SB text,
        CS text,
        BB text,
        SO text,
        IBB text,
        HBP text,
        SH text,
        SF text,
        GIDP text
    )",
    "DROP TABLE IF EXISTS Pitching",
    "CREATE TABLE Pitching (
        PlayerID text,
        YearID text,
        Stint text,
        TeamID text,
        LGID text,
        W text,
        L text,
        G text,
        GS text,
        CG text,
        SHO text,
        SV text,
        IPouts text,
        H text,
        ER text,
        HR text,
        BB text,
        SO text,
        BAOpp text,
        ERA text,
        IBB text,
        WP text,
        HBP text,
        BK text,
        BFP text,
        GF text,
        R text,
        SH text,
        SF text,
        GIDP text
    )",
    "DROP TABLE IF EXISTS Fielding",
    "CREATE TABLE Fielding (
        PlayerID text,
        YearID text,
        Stint text,
        TeamID text,
        LGID text,
        POS text,
        G text,
        GS text,
        InnOuts text,
        PO text,
        A text,
        E text,
        DP text,
        PB text,
        WP text,
        SB text,
        CS text,
        ZR text
    )",
];

/// Drops and recreates the three destination tables, then pauses `settle`.
///
/// The pause is an allowance for stores that propagate DDL asynchronously
/// across nodes; it is a heuristic, not a readiness guarantee. Pass
/// `Duration::ZERO` for local stores and tests.
///
/// Idempotent: running it twice in a row yields the same empty schema.
///
/// # Errors
///
/// Returns `StoreError::Bootstrap` on the first failing statement. This is
/// fatal to the trial.
pub async fn bootstrap_schema(pool: &SqlitePool, settle: Duration) -> Result<(), StoreError> {
    for statement in BOOTSTRAP_STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(StoreError::Bootstrap)?;
    }

    if !settle.is_zero() {
        info!(
            "Schema bootstrap complete, settling {}s for DDL propagation",
            settle.as_secs()
        );
        tokio::time::sleep(settle).await;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn table_count(pool: &SqlitePool, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .expect("count");
        count
    }

    #[tokio::test]
    async fn bootstrap_creates_three_empty_tables() {
        let pool = SqlitePool::connect("sqlite::memory:").await.expect("pool");
        bootstrap_schema(&pool, Duration::ZERO).await.expect("ddl");

        for table in ["Batting", "Pitching", "Fielding"] {
            assert_eq!(table_count(&pool, table).await, 0, "{table} should be empty");
        }
    }

    #[tokio::test]
    async fn bootstrap_is_idempotent_and_wipes_rows() {
        let pool = SqlitePool::connect("sqlite::memory:").await.expect("pool");
        bootstrap_schema(&pool, Duration::ZERO).await.expect("ddl");

        sqlx::query("INSERT INTO Fielding (PlayerID) VALUES ('aardsda01')")
            .execute(&pool)
            .await
            .expect("insert");
        assert_eq!(table_count(&pool, "Fielding").await, 1);

        // Second bootstrap must leave an identical empty schema.
        bootstrap_schema(&pool, Duration::ZERO).await.expect("ddl");
        for table in ["Batting", "Pitching", "Fielding"] {
            assert_eq!(table_count(&pool, table).await, 0, "{table} should be empty");
        }
    }
}
