//! Store connection pool management.
//!
//! Initializes the SQLite connection pool from the connection descriptor with:
//! - WAL mode enabled for concurrent access
//! - Automatic database file creation
//! - A connection ceiling sized to the largest worker-count variant
//!
//! The pool is the only store-side resource the workers share; each insert is an
//! independent, non-transactional statement on whatever connection the pool
//! hands out.

use std::str::FromStr;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::StoreError;

/// Initializes and returns a store connection pool.
///
/// `database_url` is the connection descriptor (for example
/// `sqlite:insert_bench.db`). The database file is created if it does not exist
/// and WAL mode is enabled. `max_connections` should cover the largest worker
/// count in the sweep so workers are not starved of connections.
///
/// # Errors
///
/// Returns `StoreError::Connect` if the descriptor cannot be parsed or the
/// connection cannot be established. This is fatal to the run.
pub async fn init_store_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<Arc<SqlitePool>, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| {
            error!("Invalid connection descriptor {database_url}: {e}");
            StoreError::Connect(e)
        })?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to connect to store at {database_url}: {e}");
            StoreError::Connect(e)
        })?;

    info!("Connected to store at {database_url}");
    Ok(Arc::new(pool))
}
