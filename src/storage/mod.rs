//! Destination store access: connection pool and schema bootstrap.

mod pool;
mod schema;

// Re-export public API
pub use pool::init_store_pool;
pub use schema::bootstrap_schema;
