//! Bid entity model, its version snapshot, and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tender_core::types::{DbId, Timestamp};

use crate::versioning::Versioned;

/// A row from the `bid` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bid {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub tender_id: Option<DbId>,
    pub organization_id: Option<DbId>,
    pub creator_username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub version: Option<i32>,
}

/// A row from the `bid_version` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BidVersion {
    pub id: DbId,
    pub bid_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub recorded_at: Timestamp,
}

/// DTO for creating a new bid. `status` defaults to `DRAFT`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBid {
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub tender_id: DbId,
    pub organization_id: DbId,
    pub creator_username: String,
}

impl Versioned for Bid {
    type Snapshot = BidVersion;

    const ENTITY: &'static str = "Bid";
    const TABLE: &'static str = "bid";
    const COLUMNS: &'static str = "id, name, description, status, tender_id, \
        organization_id, creator_username, created_at, updated_at, version";
    const VERSION_TABLE: &'static str = "bid_version";
    const VERSION_COLUMNS: &'static str = "id, bid_id, name, description, status, \
        version, created_at, updated_at, recorded_at";
    const OWNER_COLUMN: &'static str = "bid_id";
}
