//! Organization entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tender_core::types::{DbId, Timestamp};

/// A row from the `organization` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Legal form: `IE`, `LLC` or `JSC`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub org_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new organization.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrganization {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub org_type: String,
}

/// A row from the `organization_responsible` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrganizationResponsible {
    pub id: DbId,
    pub organization_id: DbId,
    pub user_id: DbId,
}

/// DTO for assigning an employee as responsible for an organization.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignResponsible {
    pub organization_id: DbId,
    pub user_id: DbId,
}
