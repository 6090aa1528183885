//! End-to-end tests: full trials and sweeps against a temporary SQLite store,
//! fed by the 10/5/7-row fixture datasets.

use std::path::{Path, PathBuf};

use clap::Parser;
use sqlx::SqlitePool;
use tempfile::TempDir;

use insert_bench::{
    init_store_pool, run_sweep, run_trial, write_report, Config, WorkloadConfig,
};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Config pointed at the fixtures and a store inside `dir`, with no settle pause.
fn test_config(dir: &TempDir, extra: &[&str]) -> Config {
    let database_url = format!("sqlite:{}", dir.path().join("bench.db").display());
    let data_dir = fixtures_dir();
    let mut args = vec![
        "insert_bench".to_string(),
        "--database-url".to_string(),
        database_url,
        "--data-dir".to_string(),
        data_dir.display().to_string(),
        "--settle-seconds".to_string(),
        "0".to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    Config::try_parse_from(args).expect("test config should parse")
}

async fn table_count(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count");
    count
}

#[tokio::test(flavor = "multi_thread")]
async fn end_to_end_trial_with_twenty_workers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&dir, &["--db-vendor", "PostgreSQL"]);
    let pool = init_store_pool(&config.database_url, 20).await.expect("pool");

    let workload = WorkloadConfig::from_config(&config, 20);
    let result = run_trial(&pool, &workload, &config).await.expect("trial");

    assert_eq!(result.records, 22);
    assert!(result.elapsed_seconds > 0.0);
    let expected = 22.0 / result.elapsed_seconds;
    assert!(
        (result.throughput - expected).abs() < 1e-9,
        "throughput {} should equal records/elapsed {}",
        result.throughput,
        expected
    );

    // Every fixture row landed in its table.
    assert_eq!(table_count(&pool, "Batting").await, 10);
    assert_eq!(table_count(&pool, "Pitching").await, 5);
    assert_eq!(table_count(&pool, "Fielding").await, 7);
}

#[tokio::test(flavor = "multi_thread")]
async fn drain_timer_excludes_bootstrap_settle() {
    let dir = tempfile::tempdir().expect("tempdir");
    // One second of settle would dwarf the drain of 22 rows if it leaked
    // into the measurement.
    let config = test_config(&dir, &["--settle-seconds", "1"]);
    let pool = init_store_pool(&config.database_url, 4).await.expect("pool");

    let workload = WorkloadConfig::from_config(&config, 4);
    let result = run_trial(&pool, &workload, &config).await.expect("trial");

    assert_eq!(result.records, 22);
    assert!(
        result.elapsed_seconds < 1.0,
        "elapsed {}s includes the settle pause",
        result.elapsed_seconds
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn sweep_emits_one_raw_row_per_trial() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&dir, &["--workers", "2,4", "--runs", "2"]);

    let report = run_sweep(&config).await.expect("sweep");

    // Repetition outer, variant inner.
    let worker_order: Vec<usize> = report.rows.iter().map(|r| r.workers).collect();
    assert_eq!(worker_order, vec![2, 4, 2, 4]);
    for row in &report.rows {
        assert_eq!(row.records, 22);
        assert!(row.runtime > 0.0);
        assert!(row.performance > 0.0);
    }

    // Each trial re-bootstraps, so only the last trial's rows remain.
    let pool = init_store_pool(&config.database_url, 2).await.expect("pool");
    assert_eq!(table_count(&pool, "Batting").await, 10);
    assert_eq!(table_count(&pool, "Pitching").await, 5);
    assert_eq!(table_count(&pool, "Fielding").await, 7);
}

#[tokio::test(flavor = "multi_thread")]
async fn sweep_report_round_trips_to_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(
        &dir,
        &["--workers", "3", "--runs", "2", "--db-vendor", "PostgreSQL"],
    );

    let report = run_sweep(&config).await.expect("sweep");
    let output = dir.path().join("output.csv");
    write_report(&output, &report.rows).expect("write report");

    let mut reader = csv::Reader::from_path(&output).expect("open report");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.get(0), Some("Database"));
    assert_eq!(headers.get(10), Some("Performance"));

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("report rows");
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.get(0), Some("PostgreSQL"));
        assert_eq!(row.get(1), Some("3"));
        assert_eq!(row.get(9), Some("22"));
    }
}

#[tokio::test]
async fn bootstrap_failure_aborts_the_trial() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(&dir, &[]);
    let pool = init_store_pool(&config.database_url, 2).await.expect("pool");

    // A view with a destination table's name makes DROP TABLE fail.
    sqlx::query("CREATE VIEW Batting AS SELECT 1 AS PlayerID")
        .execute(pool.as_ref())
        .await
        .expect("view");

    let workload = WorkloadConfig::from_config(&config, 2);
    let err = run_trial(&pool, &workload, &config)
        .await
        .expect_err("bootstrap should fail");
    assert!(format!("{err:#}").contains("bootstrap"));
}
