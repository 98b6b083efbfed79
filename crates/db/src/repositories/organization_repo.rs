//! Repository for the `organization` and `organization_responsible` tables.

use sqlx::PgPool;
use tender_core::types::DbId;

use crate::models::organization::{
    AssignResponsible, CreateOrganization, Organization, OrganizationResponsible,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, type, created_at, updated_at";

/// Provides create and lookup operations for organizations.
pub struct OrganizationRepo;

impl OrganizationRepo {
    /// Insert a new organization, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrganization,
    ) -> Result<Organization, sqlx::Error> {
        let query = format!(
            "INSERT INTO organization (name, description, type)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.org_type)
            .fetch_one(pool)
            .await
    }

    /// Find an organization by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organization WHERE id = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Links employees to the organizations they are responsible for.
pub struct OrganizationResponsibleRepo;

impl OrganizationResponsibleRepo {
    /// Record that `user_id` is responsible for `organization_id`.
    ///
    /// Both ids must exist; assigning the same pair twice violates
    /// `uq_organization_responsible`.
    pub async fn assign(
        pool: &PgPool,
        input: &AssignResponsible,
    ) -> Result<OrganizationResponsible, sqlx::Error> {
        sqlx::query_as::<_, OrganizationResponsible>(
            "INSERT INTO organization_responsible (organization_id, user_id)
             VALUES ($1, $2)
             RETURNING id, organization_id, user_id",
        )
        .bind(input.organization_id)
        .bind(input.user_id)
        .fetch_one(pool)
        .await
    }

    /// List responsible-employee links for an organization.
    pub async fn list_by_organization(
        pool: &PgPool,
        organization_id: DbId,
    ) -> Result<Vec<OrganizationResponsible>, sqlx::Error> {
        sqlx::query_as::<_, OrganizationResponsible>(
            "SELECT id, organization_id, user_id FROM organization_responsible
             WHERE organization_id = $1",
        )
        .bind(organization_id)
        .fetch_all(pool)
        .await
    }
}
