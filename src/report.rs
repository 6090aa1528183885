//! Report rows and CSV output.
//!
//! One row per trial, raw, with the configuration labels alongside the
//! measurement. Aggregation (means, variance) is left to whatever consumes
//! the report.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::workload::{WorkloadConfig, WorkloadResult};

/// One output row: configuration labels plus one trial's measurement.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    /// Store vendor label.
    #[serde(rename = "Database")]
    pub database: String,
    /// Worker count for this trial.
    #[serde(rename = "Workers")]
    pub workers: usize,
    /// Store on a separate server.
    #[serde(rename = "IsMultiServer")]
    pub is_multi_server: bool,
    /// Store is distributed.
    #[serde(rename = "IsDistributedDB")]
    pub is_distributed_db: bool,
    /// Store runs multiple nodes.
    #[serde(rename = "IsMultiNode")]
    pub is_multi_node: bool,
    /// Nodes span multiple data centres.
    #[serde(rename = "IsMultiDC")]
    pub is_multi_dc: bool,
    /// Node count.
    #[serde(rename = "MultiNodeCount")]
    pub multi_node_count: u32,
    /// Linear distance between data centres.
    #[serde(rename = "TotalNetworkDistance")]
    pub total_network_distance: f64,
    /// Drain-phase wall-clock seconds.
    #[serde(rename = "Runtime")]
    pub runtime: f64,
    /// Offered record count.
    #[serde(rename = "Records")]
    pub records: usize,
    /// Throughput in records per second.
    #[serde(rename = "Performance")]
    pub performance: f64,
}

impl ReportRow {
    /// Flattens a workload configuration and its trial result into one row.
    pub fn new(workload: &WorkloadConfig, result: &WorkloadResult) -> Self {
        ReportRow {
            database: workload.vendor.clone(),
            workers: workload.workers,
            is_multi_server: workload.multi_server,
            is_distributed_db: workload.distributed,
            is_multi_node: workload.multi_node,
            is_multi_dc: workload.multi_dc,
            multi_node_count: workload.node_count,
            total_network_distance: workload.network_distance,
            runtime: result.elapsed_seconds,
            records: result.records,
            performance: result.throughput,
        }
    }
}

/// Writes the report as CSV: a header row, then one row per trial.
pub fn write_report(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    for row in rows {
        writer.serialize(row).context("failed to write report row")?;
    }
    writer.flush().context("failed to flush report file")?;
    Ok(())
}
