//! Logging utilities
//!
//! Standard log lines for the I/O boundaries of an export.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_dropped_records, log_operation_complete, log_operation_start};
