//! Tender entity model, its version snapshot, and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tender_core::types::{DbId, Timestamp};

use crate::versioning::Versioned;

/// A row from the `tender` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tender {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub organization_id: Option<DbId>,
    pub creator_username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// NULL for rows written before the counter existed; read as 1.
    pub version: Option<i32>,
}

/// A row from the `tender_version` table: the state of a tender before
/// one edit. Never updated or deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TenderVersion {
    pub id: DbId,
    pub tender_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub recorded_at: Timestamp,
}

/// DTO for creating a new tender. `status` defaults to `DRAFT`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTender {
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub organization_id: DbId,
    pub creator_username: String,
}

impl Versioned for Tender {
    type Snapshot = TenderVersion;

    const ENTITY: &'static str = "Tender";
    const TABLE: &'static str = "tender";
    const COLUMNS: &'static str = "id, name, description, status, organization_id, \
        creator_username, created_at, updated_at, version";
    const VERSION_TABLE: &'static str = "tender_version";
    const VERSION_COLUMNS: &'static str = "id, tender_id, name, description, status, \
        version, created_at, updated_at, recorded_at";
    const OWNER_COLUMN: &'static str = "tender_id";
}
