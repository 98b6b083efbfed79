//! Conventional lifecycle status values for tenders and bids.
//!
//! The `status` column is free text: any string up to
//! [`MAX_STATUS_LEN`](crate::validation::MAX_STATUS_LEN) characters is
//! accepted on create, and publish/close overwrite it regardless of the
//! previous value. [`LifecycleStatus`] only names the values the service
//! itself writes.

use std::fmt;

/// Status a tender or bid is created with when the caller does not supply one.
pub const STATUS_DRAFT: &str = "DRAFT";

/// Written by the publish operation.
pub const STATUS_PUBLISHED: &str = "PUBLISHED";

/// Written by the close operation.
pub const STATUS_CLOSED: &str = "CLOSED";

/// Marker value some clients use after reverting an entity.
pub const STATUS_ROLLED_BACK: &str = "ROLLED_BACK";

/// The closed set of statuses the service knows by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleStatus {
    Draft,
    Published,
    Closed,
    RolledBack,
}

impl LifecycleStatus {
    /// The literal stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => STATUS_DRAFT,
            Self::Published => STATUS_PUBLISHED,
            Self::Closed => STATUS_CLOSED,
            Self::RolledBack => STATUS_ROLLED_BACK,
        }
    }

    /// Lower-case word used in acknowledgement bodies (`"published"`).
    pub fn ack(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Closed => "closed",
            Self::RolledBack => "rolled back",
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
