//! Error types at the store and initialization seams.
//!
//! Per-record insert failures are deliberately not represented here: they are
//! logged and skipped inside the worker pool, never propagated. Only conditions
//! that abort a trial or the whole run get a typed error.

use thiserror::Error;

/// Errors from the destination store that abort a trial or the run.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A connection to the store could not be established.
    #[error("failed to connect to the store: {0}")]
    Connect(#[source] sqlx::Error),

    /// Schema bootstrap DDL failed.
    #[error("schema bootstrap failed: {0}")]
    Bootstrap(#[source] sqlx::Error),
}

/// Errors during application initialization.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// The logger could not be installed.
    #[error("failed to initialize logger: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}
