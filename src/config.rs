//! Configuration and CLI options.
//!
//! `Config` is parsed directly from the command line with `clap` and passed by
//! reference into the sweep driver; there is no process-wide mutable state.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

// constants (used as defaults)

/// File name of the batting dataset inside `--data-dir`.
pub const BATTING_FILE: &str = "Batting.csv";
/// File name of the pitching dataset inside `--data-dir`.
pub const PITCHING_FILE: &str = "Pitching.csv";
/// File name of the fielding dataset inside `--data-dir`.
pub const FIELDING_FILE: &str = "Fielding.csv";

/// Default bulk queue capacity.
///
/// Sized well above the full Lahman dataset so producers never block on enqueue;
/// the pipeline trades memory headroom for the absence of backpressure.
pub const DEFAULT_QUEUE_CAPACITY: usize = 500_000;

/// Default pause after schema bootstrap, in seconds.
///
/// Distributed stores may apply DDL asynchronously across nodes; the pause is a
/// heuristic allowance for that propagation, not a readiness guarantee. A stronger
/// design would poll the store until the new schema is visible.
pub const DEFAULT_SETTLE_SECS: u64 = 15;

/// Default worker-count variants for the sweep.
pub const DEFAULT_WORKER_COUNTS: [usize; 3] = [20, 40, 60];

/// Default number of trial repetitions per variant.
pub const DEFAULT_RUNS: usize = 5;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have defaults and can be overridden via command-line flags.
///
/// # Examples
///
/// ```bash
/// # Benchmark a local SQLite file with the default 20/40/60 sweep
/// insert_bench
///
/// # Custom store, label and sweep
/// insert_bench --database-url sqlite:bench.db --db-vendor SQLite \
///     --workers 10,20 --runs 3 --settle-seconds 0
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "insert_bench",
    about = "Loads the Lahman CSV datasets into a SQL store and measures insert throughput.",
    args_override_self = true
)]
pub struct Config {
    /// Connection descriptor for the destination store
    #[arg(long, default_value = "sqlite:insert_bench.db")]
    pub database_url: String,

    /// Vendor label recorded on every result row (does not alter behavior)
    #[arg(long, default_value = "SQLite")]
    pub db_vendor: String,

    /// Is the store on a separate server from the benchmark runner?
    #[arg(long)]
    pub multi_server: bool,

    /// Is the store a distributed database?
    #[arg(long)]
    pub distributed: bool,

    /// Is the store running with multiple nodes enabled?
    #[arg(long)]
    pub multi_node: bool,

    /// Is the cluster of nodes spread across multiple data centres?
    #[arg(long)]
    pub multi_dc: bool,

    /// If multiple nodes are running, how many?
    #[arg(long, default_value_t = 1)]
    pub node_count: u32,

    /// Linear distance between data centres, if multi-DC
    #[arg(long, default_value_t = 0.0)]
    pub network_distance: f64,

    /// Worker-count variants to sweep, in order
    #[arg(long = "workers", value_delimiter = ',', default_values_t = DEFAULT_WORKER_COUNTS)]
    pub worker_counts: Vec<usize>,

    /// Number of trial repetitions per variant
    #[arg(long, default_value_t = DEFAULT_RUNS)]
    pub runs: usize,

    /// Directory containing Batting.csv, Pitching.csv and Fielding.csv
    #[arg(long, value_parser, default_value = "data")]
    pub data_dir: PathBuf,

    /// Report output path (CSV, one row per trial)
    #[arg(long, value_parser, default_value = "output.csv")]
    pub output: PathBuf,

    /// Bulk queue capacity
    ///
    /// Must be at least the total row count of the three datasets, so that
    /// producers never block and the worker pool is guaranteed to drain.
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    pub queue_capacity: usize,

    /// Seconds to pause after schema bootstrap
    ///
    /// Allowance for asynchronous DDL propagation in distributed stores.
    /// Heuristic only; set to 0 for local stores.
    #[arg(long, default_value_t = DEFAULT_SETTLE_SECS)]
    pub settle_seconds: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config::parse_from(std::iter::empty::<std::ffi::OsString>())
    }
}

impl Config {
    /// The post-bootstrap settle pause as a `Duration`.
    pub fn settle(&self) -> Duration {
        Duration::from_secs(self.settle_seconds)
    }

    /// Full path of one dataset file inside `data_dir`.
    pub fn dataset_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::try_parse_from(["insert_bench"]).expect("defaults should parse");
        assert_eq!(config.database_url, "sqlite:insert_bench.db");
        assert_eq!(config.worker_counts, DEFAULT_WORKER_COUNTS.to_vec());
        assert_eq!(config.runs, DEFAULT_RUNS);
        assert_eq!(config.queue_capacity, DEFAULT_QUEUE_CAPACITY);
        assert_eq!(config.settle_seconds, DEFAULT_SETTLE_SECS);
        assert_eq!(config.node_count, 1);
        assert!(!config.multi_server);
        assert!(!config.distributed);
    }

    #[test]
    fn worker_counts_parse_comma_separated() {
        let config = Config::try_parse_from(["insert_bench", "--workers", "10,20,30,40"])
            .expect("worker list should parse");
        assert_eq!(config.worker_counts, vec![10, 20, 30, 40]);
    }

    #[test]
    fn topology_flags_parse() {
        let config = Config::try_parse_from([
            "insert_bench",
            "--multi-server",
            "--distributed",
            "--multi-node",
            "--node-count",
            "3",
            "--network-distance",
            "1200.5",
        ])
        .expect("topology flags should parse");
        assert!(config.multi_server);
        assert!(config.distributed);
        assert!(config.multi_node);
        assert!(!config.multi_dc);
        assert_eq!(config.node_count, 3);
        assert_eq!(config.network_distance, 1200.5);
    }

    #[test]
    fn dataset_path_joins_data_dir() {
        let config = Config::try_parse_from(["insert_bench", "--data-dir", "/tmp/lahman"])
            .expect("data dir should parse");
        assert_eq!(
            config.dataset_path(BATTING_FILE),
            PathBuf::from("/tmp/lahman/Batting.csv")
        );
    }
}
