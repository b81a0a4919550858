// Rust guideline compliant 2026-10-19

//! Timestamp helpers for Leitner.

use crate::error::{AppError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current Unix timestamp in milliseconds.
///
/// # Errors
///
/// Returns an error if the system clock is before the Unix epoch.
pub fn unix_millis() -> Result<i64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| AppError::InvalidInput(format!("System time before epoch: {err}")))?
        .as_millis() as i64;
    Ok(now)
}
