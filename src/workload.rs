//! The benchmark orchestrator: one timed trial for one configuration.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::pipeline::{gather_records, run_worker_pool, GatherOutcome};
use crate::storage::bootstrap_schema;

/// Immutable descriptor of one benchmark configuration.
///
/// Constructed once per worker-count variant before the sweep begins. The
/// vendor and topology fields are labels carried onto result rows; they never
/// alter pipeline behavior.
#[derive(Debug, Clone)]
pub struct WorkloadConfig {
    /// Store vendor label.
    pub vendor: String,
    /// Number of concurrent workers draining the queue.
    pub workers: usize,
    /// Store runs on a separate server from the benchmark runner.
    pub multi_server: bool,
    /// Store is a distributed database.
    pub distributed: bool,
    /// Store runs with multiple nodes enabled.
    pub multi_node: bool,
    /// Nodes span multiple data centres.
    pub multi_dc: bool,
    /// Node count, if multi-node.
    pub node_count: u32,
    /// Linear distance between data centres, if multi-DC.
    pub network_distance: f64,
}

impl WorkloadConfig {
    /// Builds the descriptor for one worker-count variant from the CLI config.
    pub fn from_config(config: &Config, workers: usize) -> Self {
        WorkloadConfig {
            vendor: config.db_vendor.clone(),
            workers,
            multi_server: config.multi_server,
            distributed: config.distributed,
            multi_node: config.multi_node,
            multi_dc: config.multi_dc,
            node_count: config.node_count,
            network_distance: config.network_distance,
        }
    }
}

/// Measurement of one trial. Populated exactly once, never mutated afterward.
#[derive(Debug, Clone)]
pub struct WorkloadResult {
    /// Offered record count: what the producers enqueued, captured before the
    /// drain. Inserts that later fail are logged but still counted here, so
    /// this measures offered load, not completed work.
    pub records: usize,
    /// Wall-clock seconds of the drain phase only; gather and bootstrap are
    /// excluded.
    pub elapsed_seconds: f64,
    /// Derived throughput: `records / elapsed_seconds`.
    pub throughput: f64,
}

/// Runs one trial: gather, bootstrap, timed drain, measure.
///
/// Phases are strictly sequential. The producers run to completion before any
/// DDL is issued, the schema is rebuilt from scratch, and only the drain is
/// timed. A bootstrap failure aborts the trial; per-record issues during
/// gather or drain are logged and skipped without aborting.
pub async fn run_trial(
    pool: &Arc<SqlitePool>,
    workload: &WorkloadConfig,
    config: &Config,
) -> Result<WorkloadResult> {
    // Phase 1: gather. The offered count is final once all producers joined.
    let GatherOutcome { queue, offered } = gather_records(&config.data_dir, config.queue_capacity).await;

    // Phase 2: bootstrap. Fatal on DDL failure.
    bootstrap_schema(pool, config.settle())
        .await
        .context("cannot bootstrap destination schema")?;

    // Phase 3: timed drain.
    let start = Instant::now();
    let dequeued = run_worker_pool(pool, queue, workload.workers).await;
    let elapsed_seconds = start.elapsed().as_secs_f64();

    // Phase 4: measure.
    let result = WorkloadResult {
        records: offered,
        elapsed_seconds,
        throughput: offered as f64 / elapsed_seconds,
    };
    info!(
        "Trial complete: {} workers, {} offered, {} dequeued, {:.3}s, {:.1} records/s",
        workload.workers, offered, dequeued, result.elapsed_seconds, result.throughput
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn workload_config_carries_labels_per_variant() {
        let config = Config::try_parse_from([
            "insert_bench",
            "--db-vendor",
            "CockroachDB",
            "--distributed",
            "--multi-node",
            "--node-count",
            "3",
        ])
        .expect("config");

        let workload = WorkloadConfig::from_config(&config, 40);
        assert_eq!(workload.vendor, "CockroachDB");
        assert_eq!(workload.workers, 40);
        assert!(workload.distributed);
        assert!(workload.multi_node);
        assert!(!workload.multi_dc);
        assert_eq!(workload.node_count, 3);
    }
}
