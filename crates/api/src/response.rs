//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope.
//! Use [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`
//! to get compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Acknowledgement body for mutations that do not return the entity.
///
/// `{"status": "updated"}`, `{"status": "rolled back", "version": 3}`, ...
#[derive(Debug, Serialize)]
pub struct StatusAck {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

impl StatusAck {
    pub fn new(status: &'static str) -> Self {
        Self {
            status,
            version: None,
        }
    }

    pub fn with_version(status: &'static str, version: i32) -> Self {
        Self {
            status,
            version: Some(version),
        }
    }
}
