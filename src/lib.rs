//! insert_bench library: bulk-insert throughput benchmarking.
//!
//! This library loads the three Lahman statistics CSV files (batting, pitching,
//! fielding) into a SQL database through a bounded queue drained by a configurable
//! pool of concurrent writers, and measures insert throughput across worker-count
//! variants and repeated trials.
//!
//! # Example
//!
//! ```no_run
//! use insert_bench::{run_sweep, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     worker_counts: vec![20, 40],
//!     runs: 3,
//!     ..Default::default()
//! };
//!
//! let report = run_sweep(&config).await?;
//! println!("{} trials in {:.1}s", report.rows.len(), report.elapsed_seconds);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod pipeline;
pub mod records;
pub mod report;
mod storage;
mod sweep;
mod workload;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, StoreError};
pub use pipeline::{gather_records, run_worker_pool, GatherOutcome, SharedQueue};
pub use report::{write_report, ReportRow};
pub use storage::{bootstrap_schema, init_store_pool};
pub use sweep::{run_sweep, SweepReport};
pub use workload::{run_trial, WorkloadConfig, WorkloadResult};
