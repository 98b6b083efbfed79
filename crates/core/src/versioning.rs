//! Version counter arithmetic for tenders and bids.
//!
//! A live row carries the number of its current state. Editing snapshots the
//! current state under that number and moves the live row to the next one;
//! rolling back restores a snapshot and adopts its number unchanged.

use crate::error::CoreError;

/// Version assigned to a freshly created entity.
pub const INITIAL_VERSION: i32 = 1;

/// The live version of a row whose `version` column may be NULL.
///
/// Rows written before the counter existed have no value; they are treated
/// as being at [`INITIAL_VERSION`].
pub fn effective_version(stored: Option<i32>) -> i32 {
    stored.unwrap_or(INITIAL_VERSION)
}

/// The version a live row moves to after an edit of `current`.
pub fn next_version(current: i32) -> Result<i32, CoreError> {
    current
        .checked_add(1)
        .ok_or_else(|| CoreError::Internal(format!("Version counter overflow at {current}")))
}

/// Reject rollback targets that can never name a snapshot.
pub fn validate_target_version(version: i32) -> Result<(), CoreError> {
    if version < INITIAL_VERSION {
        return Err(CoreError::Validation(format!(
            "Version must be a positive integer, got {version}"
        )));
    }
    Ok(())
}
