//! Repository for the `bid` table.
//!
//! Creation and reads only; edits, rollbacks and status changes go through
//! [`VersioningEngine`](crate::versioning::VersioningEngine).

use sqlx::PgPool;
use tender_core::status::LifecycleStatus;
use tender_core::types::DbId;
use tender_core::versioning::INITIAL_VERSION;

use crate::models::bid::{Bid, CreateBid};
use crate::versioning::Versioned;

/// Provides create and read operations for bids.
pub struct BidRepo;

impl BidRepo {
    /// Insert a new bid at version 1. No snapshot is recorded.
    pub async fn create(pool: &PgPool, input: &CreateBid) -> Result<Bid, sqlx::Error> {
        let query = format!(
            "INSERT INTO bid
                (name, description, status, tender_id, organization_id, creator_username, version)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {}",
            Bid::COLUMNS
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(
                input
                    .status
                    .as_deref()
                    .unwrap_or(LifecycleStatus::Draft.as_str()),
            )
            .bind(input.tender_id)
            .bind(input.organization_id)
            .bind(&input.creator_username)
            .bind(INITIAL_VERSION)
            .fetch_one(pool)
            .await
    }

    /// Find a bid by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Bid>, sqlx::Error> {
        let query = format!("SELECT {} FROM bid WHERE id = $1", Bid::COLUMNS);
        sqlx::query_as::<_, Bid>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the bids created by `username`.
    pub async fn list_by_creator(pool: &PgPool, username: &str) -> Result<Vec<Bid>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM bid
             WHERE creator_username = $1
             ORDER BY created_at DESC, id",
            Bid::COLUMNS
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(username)
            .fetch_all(pool)
            .await
    }

    /// List all bids submitted against a tender.
    pub async fn list_by_tender(pool: &PgPool, tender_id: DbId) -> Result<Vec<Bid>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM bid
             WHERE tender_id = $1
             ORDER BY created_at DESC, id",
            Bid::COLUMNS
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(tender_id)
            .fetch_all(pool)
            .await
    }

    /// List the bids on a tender by one author on behalf of one organization.
    pub async fn list_for_review(
        pool: &PgPool,
        tender_id: DbId,
        author_username: &str,
        organization_id: DbId,
    ) -> Result<Vec<Bid>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM bid
             WHERE tender_id = $1 AND creator_username = $2 AND organization_id = $3
             ORDER BY created_at DESC, id",
            Bid::COLUMNS
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(tender_id)
            .bind(author_username)
            .bind(organization_id)
            .fetch_all(pool)
            .await
    }
}
