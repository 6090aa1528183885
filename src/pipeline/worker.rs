//! The worker pool draining the bulk queue into the store.

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, error};
use sqlx::SqlitePool;
use tokio::sync::{mpsc, Mutex};

use crate::records::Record;

/// The bulk queue as seen by workers: one receiver shared across the pool.
///
/// `tokio::sync::mpsc` is single-consumer, so the receiver sits behind an
/// async mutex; the lock is held only across the dequeue, never across an
/// insert, so inserts from different workers proceed concurrently.
pub type SharedQueue = Arc<Mutex<mpsc::Receiver<Record>>>;

/// Spawns `workers` consumers and blocks until the queue is drained.
///
/// Each worker exits normally when the queue is closed and empty; that is the
/// pool's only termination condition. A failed insert is logged with the
/// offending record and skipped, and never affects other records or workers.
///
/// Returns the total number of records dequeued across the pool, which equals
/// the number enqueued: every item is consumed exactly once, whether or not
/// its insert succeeded.
pub async fn run_worker_pool(pool: &Arc<SqlitePool>, queue: SharedQueue, workers: usize) -> usize {
    let handles: Vec<_> = (0..workers)
        .map(|worker_id| {
            tokio::spawn(insert_loop(
                Arc::clone(pool),
                Arc::clone(&queue),
                worker_id,
            ))
        })
        .collect();

    let mut dequeued = 0usize;
    for joined in join_all(handles).await {
        match joined {
            Ok(count) => dequeued += count,
            Err(e) => error!("worker task failed to join: {e}"),
        }
    }
    dequeued
}

/// One worker: dequeue, persist, repeat until the queue closes.
async fn insert_loop(pool: Arc<SqlitePool>, queue: SharedQueue, worker_id: usize) -> usize {
    let mut handled = 0usize;
    loop {
        let record = {
            let mut rx = queue.lock().await;
            rx.recv().await
        };
        match record {
            Some(record) => {
                handled += 1;
                if let Err(e) = record.persist(&pool).await {
                    error!("worker {worker_id}: could not insert {record:?}: {e}");
                }
            }
            // Queue closed and empty: normal exit, not an error.
            None => break,
        }
    }
    debug!("worker {worker_id}: handled {handled} records");
    handled
}
