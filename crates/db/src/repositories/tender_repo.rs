//! Repository for the `tender` table.
//!
//! Creation and reads only; edits, rollbacks and status changes go through
//! [`VersioningEngine`](crate::versioning::VersioningEngine).

use sqlx::PgPool;
use tender_core::status::LifecycleStatus;
use tender_core::types::DbId;
use tender_core::versioning::INITIAL_VERSION;

use crate::models::tender::{CreateTender, Tender};
use crate::versioning::Versioned;

/// Provides create and read operations for tenders.
pub struct TenderRepo;

impl TenderRepo {
    /// Insert a new tender at version 1. No snapshot is recorded.
    pub async fn create(pool: &PgPool, input: &CreateTender) -> Result<Tender, sqlx::Error> {
        let query = format!(
            "INSERT INTO tender
                (name, description, status, organization_id, creator_username, version)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            Tender::COLUMNS
        );
        sqlx::query_as::<_, Tender>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(
                input
                    .status
                    .as_deref()
                    .unwrap_or(LifecycleStatus::Draft.as_str()),
            )
            .bind(input.organization_id)
            .bind(&input.creator_username)
            .bind(INITIAL_VERSION)
            .fetch_one(pool)
            .await
    }

    /// Find a tender by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tender>, sqlx::Error> {
        let query = format!("SELECT {} FROM tender WHERE id = $1", Tender::COLUMNS);
        sqlx::query_as::<_, Tender>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tenders, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tender>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM tender ORDER BY created_at DESC, id",
            Tender::COLUMNS
        );
        sqlx::query_as::<_, Tender>(&query).fetch_all(pool).await
    }

    /// List the tenders created by `username`.
    pub async fn list_by_creator(
        pool: &PgPool,
        username: &str,
    ) -> Result<Vec<Tender>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM tender
             WHERE creator_username = $1
             ORDER BY created_at DESC, id",
            Tender::COLUMNS
        );
        sqlx::query_as::<_, Tender>(&query)
            .bind(username)
            .fetch_all(pool)
            .await
    }
}
