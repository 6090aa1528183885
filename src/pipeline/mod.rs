//! The concurrent producer/consumer pipeline.
//!
//! Three producers read the dataset files end-to-end and fan into one bounded
//! queue; a configurable pool of workers drains the queue into the store. The
//! queue is a `tokio::sync::mpsc` channel whose capacity is provisioned above
//! the full dataset size, so producers never block meaningfully and the pool is
//! guaranteed to drain and terminate for any worker count ≥ 1.
//!
//! The channel closes exactly once: every producer owns one `Sender` clone and
//! drops it on completion, and the gather join drops the last one. Workers see
//! end-of-stream as `recv() == None` once the queue is closed and empty.

mod producer;
mod worker;

pub use producer::{gather_records, GatherOutcome};
pub use worker::{run_worker_pool, SharedQueue};
