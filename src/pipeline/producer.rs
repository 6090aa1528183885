//! Record producers and the gather phase.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use tokio::sync::{mpsc, Mutex};

use crate::config::{BATTING_FILE, FIELDING_FILE, PITCHING_FILE};
use crate::pipeline::SharedQueue;
use crate::records::{BattingRow, FieldingRow, PitchingRow, Record};

/// Result of the gather phase: the closed, loaded queue and the offered count.
pub struct GatherOutcome {
    /// The bulk queue, closed and holding every produced record.
    pub queue: SharedQueue,
    /// Number of records enqueued, captured after all producers finished.
    ///
    /// This is the offered count, not a count of successful inserts.
    pub offered: usize,
}

/// Runs the three dataset producers concurrently and returns the loaded queue.
///
/// Each producer reads its CSV file in file order and enqueues every row; the
/// three streams interleave freely in the queue. The queue closes once, when
/// the last producer has finished. `capacity` must be at least the total row
/// count of the datasets: workers only start after gather completes, so a
/// producer that fills the queue would wait forever.
pub async fn gather_records(data_dir: &Path, capacity: usize) -> GatherOutcome {
    let (tx, mut rx) = mpsc::channel::<Record>(capacity);

    info!("Gathering all records ...");
    let producers = [
        tokio::spawn(produce::<BattingRow>(
            data_dir.join(BATTING_FILE),
            tx.clone(),
            "batting",
        )),
        tokio::spawn(produce::<PitchingRow>(
            data_dir.join(PITCHING_FILE),
            tx.clone(),
            "pitching",
        )),
        tokio::spawn(produce::<FieldingRow>(
            data_dir.join(FIELDING_FILE),
            tx.clone(),
            "fielding",
        )),
    ];
    drop(tx);

    for joined in join_all(producers).await {
        if let Err(e) = joined {
            error!("producer task failed to join: {e}");
        }
    }

    // All senders are gone now, so this depth is final.
    let offered = rx.len();
    info!("Gather complete, {offered} records to insert");

    GatherOutcome {
        queue: Arc::new(Mutex::new(rx)),
        offered,
    }
}

/// Reads one dataset file and enqueues each row as a `Record`.
///
/// Stops on the first row-scan error rather than skipping the bad row; the
/// rows enqueued before the failure stay in the queue, so a partial dataset is
/// indistinguishable from a complete one downstream. A file that cannot be
/// read is the same policy at row zero. Returns the number of rows enqueued.
async fn produce<T>(path: PathBuf, queue: mpsc::Sender<Record>, dataset: &'static str) -> usize
where
    T: DeserializeOwned + Into<Record>,
{
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("{dataset}: could not read {}: {e}", path.display());
            return 0;
        }
    };

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let mut sent = 0usize;
    for row in reader.deserialize::<T>() {
        match row {
            Ok(row) => {
                if queue.send(row.into()).await.is_err() {
                    // Receiver dropped; nobody will drain the queue.
                    break;
                }
                sent += 1;
            }
            Err(e) => {
                warn!("{dataset}: row scan error after {sent} rows, stopping: {e}");
                break;
            }
        }
    }

    debug!("{dataset}: enqueued {sent} rows from {}", path.display());
    sent
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
    }

    #[tokio::test]
    async fn gather_counts_all_three_fixtures() {
        // Fixtures hold 10 batting, 5 pitching and 7 fielding rows.
        let outcome = gather_records(&fixtures_dir(), 1000).await;
        assert_eq!(outcome.offered, 22);

        // The queue is closed and still holds everything.
        let mut rx = Arc::try_unwrap(outcome.queue)
            .expect("sole owner")
            .into_inner();
        let mut drained = 0;
        while rx.recv().await.is_some() {
            drained += 1;
        }
        assert_eq!(drained, 22);
    }

    #[tokio::test]
    async fn missing_files_yield_an_empty_queue() {
        let dir = tempfile::tempdir().expect("tempdir");
        let outcome = gather_records(dir.path(), 16).await;
        assert_eq!(outcome.offered, 0);
    }

    #[tokio::test]
    async fn bad_row_stops_that_producer_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        // Two good fielding rows, then a truncated one, then a good one that
        // must not be reached.
        std::fs::write(
            dir.path().join(FIELDING_FILE),
            "playerID,yearID,stint,teamID,lgID,POS,G,GS,InnOuts,PO,A,E,DP,PB,WP,SB,CS,ZR\n\
             a,1954,1,ML1,NL,OF,116,113,3093,223,5,7,0,,,,,\n\
             b,1954,1,ML1,NL,OF,116,113,3093,223,5,7,0,,,,,\n\
             c,1954,1\n\
             d,1954,1,ML1,NL,OF,116,113,3093,223,5,7,0,,,,,\n",
        )
        .expect("write fixture");
        std::fs::copy(
            fixtures_dir().join(BATTING_FILE),
            dir.path().join(BATTING_FILE),
        )
        .expect("copy batting fixture");

        let outcome = gather_records(dir.path(), 64).await;
        // 10 batting rows plus the 2 fielding rows before the scan error;
        // pitching is absent entirely.
        assert_eq!(outcome.offered, 12);
    }
}
