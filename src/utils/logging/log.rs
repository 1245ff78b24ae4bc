//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::path::Path;
use std::time::Duration;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - Path of the file being operated on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Past-tense verb for what happened ("loaded", "wrote")
/// * `path` - Path of the file that was operated on
/// * `items` - Number of records or lines processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    items: usize,
    elapsed: Option<Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {} {} records ({}) in {:?}",
            operation,
            items,
            path.display(),
            duration
        ),
        None => log::info!(
            "Successfully {} {} records ({})",
            operation,
            items,
            path.display()
        ),
    }
}

/// Warn about input records that were skipped
///
/// Nothing is logged when `count` is zero.
pub fn log_dropped_records(kind: &str, count: usize, reason: &str) {
    if count > 0 {
        log::warn!("Dropped {count} {kind} record(s): {reason}");
    }
}
