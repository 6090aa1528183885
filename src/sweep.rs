//! The sweep driver: repetitions × worker-count variants.

use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::config::Config;
use crate::report::ReportRow;
use crate::storage::init_store_pool;
use crate::workload::{run_trial, WorkloadConfig};

/// Results of a completed sweep.
#[derive(Debug, Clone)]
pub struct SweepReport {
    /// One raw row per (repetition, variant) trial, in execution order.
    /// No aggregation is applied; every row stands alone.
    pub rows: Vec<ReportRow>,
    /// Wall-clock seconds for the whole sweep, including gather and bootstrap.
    pub elapsed_seconds: f64,
}

/// Runs the full sweep: every worker-count variant, repeated `config.runs` times.
///
/// Repetition is the outer loop and variant the inner loop, so variants stay
/// interleaved across time rather than clustered. Every trial starts from a
/// clean slate: a fresh destructive bootstrap and a fresh read of the source
/// files, with nothing cached between trials.
///
/// # Errors
///
/// Returns an error if the store connection cannot be established or a trial's
/// schema bootstrap fails; either aborts the sweep.
pub async fn run_sweep(config: &Config) -> Result<SweepReport> {
    let max_workers = config.worker_counts.iter().copied().max().unwrap_or(1);
    let pool = init_store_pool(&config.database_url, max_workers as u32)
        .await
        .context("cannot open store connection")?;

    let workloads: Vec<WorkloadConfig> = config
        .worker_counts
        .iter()
        .map(|&workers| WorkloadConfig::from_config(config, workers))
        .collect();

    let start = Instant::now();
    let mut rows = Vec::with_capacity(config.runs * workloads.len());
    for run in 0..config.runs {
        for workload in &workloads {
            info!(
                "Run {}/{}, {} workers against {}",
                run + 1,
                config.runs,
                workload.workers,
                workload.vendor
            );
            let result = run_trial(&pool, workload, config)
                .await
                .with_context(|| {
                    format!("trial failed (run {}, {} workers)", run + 1, workload.workers)
                })?;
            rows.push(ReportRow::new(workload, &result));
        }
    }

    Ok(SweepReport {
        rows,
        elapsed_seconds: start.elapsed().as_secs_f64(),
    })
}
