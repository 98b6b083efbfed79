//! Field validation for create and edit requests.
//!
//! Limits mirror the column widths in the initial migration.

use crate::error::CoreError;

/// Maximum length of tender, bid and organization names.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of usernames and employee first/last names.
pub const MAX_USERNAME_LEN: usize = 50;

/// Maximum length of a status value.
pub const MAX_STATUS_LEN: usize = 50;

fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate an entity name (tender, bid, organization).
///
/// Names are opaque: only the column width is enforced.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    validate_max_len("name", name, MAX_NAME_LEN)
}

/// Validate a username, either for a new employee or as a creator reference.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.trim().is_empty() {
        return Err(CoreError::Validation("username must not be empty".into()));
    }
    validate_max_len("username", username, MAX_USERNAME_LEN)
}

/// Validate a status value. Any string within the column width is
/// accepted; no transition rules apply.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    validate_max_len("status", status, MAX_STATUS_LEN)
}

/// Validate an optional first or last name. Empty values are allowed.
pub fn validate_person_name(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_max_len(field, v, MAX_USERNAME_LEN),
        None => Ok(()),
    }
}
