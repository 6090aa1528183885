//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `insert_bench` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Report file output and user-facing summary formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use insert_bench::initialization::init_logger_with;
use insert_bench::{run_sweep, write_report, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_sweep(&config).await {
        Ok(report) => {
            write_report(&config.output, &report.rows)
                .with_context(|| format!("Failed to write report to {}", config.output.display()))?;
            println!(
                "Completed {} trial{} ({} worker variant{}, {} run{}) in {:.1}s",
                report.rows.len(),
                if report.rows.len() == 1 { "" } else { "s" },
                config.worker_counts.len(),
                if config.worker_counts.len() == 1 { "" } else { "s" },
                config.runs,
                if config.runs == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Results saved in {}", config.output.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("insert_bench error: {:#}", e);
            process::exit(1);
        }
    }
}
