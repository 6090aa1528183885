//! Application initialization.
//!
//! Currently this only covers logger setup; store and queue construction live in
//! their own modules and are initialized per sweep.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
