//! Versioned edit and rollback for tenders and bids.
//!
//! Both entity kinds keep their current state in a live table and every
//! prior state in an append-only history table. [`VersioningEngine`] is the
//! only writer of the `version` column after creation:
//!
//! - `edit` snapshots the live row under its current number, then writes the
//!   new name/description and bumps the number by one.
//! - `rollback` copies a snapshot back onto the live row and adopts the
//!   snapshot's number. The pre-rollback state is not recorded.
//!
//! Each operation runs in one transaction and applies its live-row update
//! only if the row is unchanged since it was read. Because rollback reuses
//! old version numbers, the guard also checks the `revision` column, which
//! every engine write increments and which therefore never repeats. A
//! concurrent writer that got there first makes the update match zero rows;
//! the operation then fails with [`CoreError::Conflict`] and its snapshot
//! insert is rolled back.

use serde::Deserialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use tender_core::error::CoreError;
use tender_core::status::LifecycleStatus;
use tender_core::types::{DbId, Timestamp};
use tender_core::versioning::{effective_version, next_version, validate_target_version};

/// A live table with an append-only history table beside it.
///
/// Table and column names are interpolated into SQL, so they must be
/// compile-time constants.
pub trait Versioned: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Row type of the history table.
    type Snapshot: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    /// Human-readable name used in error messages.
    const ENTITY: &'static str;
    /// Live table.
    const TABLE: &'static str;
    /// Column list of the live table, in `Self` field order.
    const COLUMNS: &'static str;
    /// History table.
    const VERSION_TABLE: &'static str;
    /// Column list of the history table, in `Self::Snapshot` field order.
    const VERSION_COLUMNS: &'static str;
    /// History column referencing the live row.
    const OWNER_COLUMN: &'static str;
}

/// DTO for editing a tender or bid. Status is not editable here.
#[derive(Debug, Clone, Deserialize)]
pub struct EditEntity {
    pub name: String,
    pub description: String,
}

/// Error type for versioning operations.
#[derive(Debug, thiserror::Error)]
pub enum VersioningError {
    /// Missing entity or version, conflict, or rejected input.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The fields copied between a live row and its snapshots.
#[derive(Debug, FromRow)]
struct VersionedState {
    name: String,
    description: Option<String>,
    status: String,
    version: Option<i32>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

const STATE_COLUMNS: &str = "name, description, status, version, created_at, updated_at";

/// A live row as read before a guarded update.
#[derive(Debug, FromRow)]
struct LiveState {
    #[sqlx(flatten)]
    state: VersionedState,
    revision: i64,
}

/// Live-row predicate shared by edit and rollback. `$1` is the id.
fn guard(version_param: u8, revision_param: u8) -> String {
    format!("id = $1 AND COALESCE(version, 1) = ${version_param} AND revision = ${revision_param}")
}

/// Snapshot-then-mutate operations shared by every [`Versioned`] entity.
pub struct VersioningEngine;

impl VersioningEngine {
    /// Replace name and description, recording the previous state first.
    ///
    /// Returns the updated live row. Fails with `NotFound` if the entity does
    /// not exist (nothing is written) and with `Conflict` if another writer
    /// changed the row between the read and the update.
    pub async fn edit<T: Versioned>(
        pool: &PgPool,
        id: DbId,
        input: &EditEntity,
    ) -> Result<T, VersioningError> {
        let mut tx = pool.begin().await?;

        let read = format!(
            "SELECT {STATE_COLUMNS}, revision FROM {} WHERE id = $1",
            T::TABLE
        );
        let LiveState {
            state: current,
            revision,
        } = sqlx::query_as::<_, LiveState>(&read)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: T::ENTITY,
                id,
            })?;

        let current_version = effective_version(current.version);
        let new_version = next_version(current_version)?;

        let snapshot = format!(
            "INSERT INTO {} ({}, name, description, status, version, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
            T::VERSION_TABLE,
            T::OWNER_COLUMN
        );
        sqlx::query(&snapshot)
            .bind(id)
            .bind(&current.name)
            .bind(&current.description)
            .bind(&current.status)
            .bind(current_version)
            .bind(current.created_at)
            .bind(current.updated_at)
            .execute(&mut *tx)
            .await?;

        let update = format!(
            "UPDATE {} SET
                name = $2,
                description = $3,
                updated_at = NOW(),
                version = $4,
                revision = revision + 1
             WHERE {}
             RETURNING {}",
            T::TABLE,
            guard(5, 6),
            T::COLUMNS
        );
        let updated = sqlx::query_as::<_, T>(&update)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(new_version)
            .bind(current_version)
            .bind(revision)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| conflict::<T>(id, current_version))?;

        tx.commit().await?;

        tracing::debug!(
            entity = T::ENTITY,
            %id,
            from_version = current_version,
            to_version = new_version,
            "Snapshot recorded and live row updated"
        );
        Ok(updated)
    }

    /// Restore name, description and status from the snapshot numbered
    /// `version`, and set the live version to exactly `version`.
    ///
    /// Fails with `Validation` for non-positive versions, `VersionNotFound`
    /// when no such snapshot exists (the entity is left untouched), and
    /// `Conflict` on a concurrent change.
    pub async fn rollback<T: Versioned>(
        pool: &PgPool,
        id: DbId,
        version: i32,
    ) -> Result<T, VersioningError> {
        validate_target_version(version)?;

        let mut tx = pool.begin().await?;

        // Several snapshots may carry the same number once an entity has been
        // rolled back and edited again; the latest one wins.
        let find = format!(
            "SELECT {STATE_COLUMNS} FROM {}
             WHERE {} = $1 AND version = $2
             ORDER BY recorded_at DESC, id DESC
             LIMIT 1",
            T::VERSION_TABLE,
            T::OWNER_COLUMN
        );
        let target = sqlx::query_as::<_, VersionedState>(&find)
            .bind(id)
            .bind(version)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::VersionNotFound {
                entity: T::ENTITY,
                id,
                version,
            })?;

        let read = format!("SELECT version, revision FROM {} WHERE id = $1", T::TABLE);
        let (live_version, revision) = sqlx::query_as::<_, (Option<i32>, i64)>(&read)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: T::ENTITY,
                id,
            })?;
        let live_version = effective_version(live_version);

        let update = format!(
            "UPDATE {} SET
                name = $2,
                description = $3,
                status = $4,
                version = $5,
                updated_at = NOW(),
                revision = revision + 1
             WHERE {}
             RETURNING {}",
            T::TABLE,
            guard(6, 7),
            T::COLUMNS
        );
        let restored = sqlx::query_as::<_, T>(&update)
            .bind(id)
            .bind(&target.name)
            .bind(&target.description)
            .bind(&target.status)
            .bind(version)
            .bind(live_version)
            .bind(revision)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| conflict::<T>(id, live_version))?;

        tx.commit().await?;

        tracing::debug!(
            entity = T::ENTITY,
            %id,
            from_version = live_version,
            to_version = version,
            "Live row restored from snapshot"
        );
        Ok(restored)
    }

    /// Overwrite the status unconditionally. Any status may follow any other;
    /// no snapshot is recorded and the version is unchanged. The revision is
    /// bumped so an in-flight edit cannot snapshot the superseded status.
    pub async fn set_status<T: Versioned>(
        pool: &PgPool,
        id: DbId,
        status: LifecycleStatus,
    ) -> Result<T, VersioningError> {
        let query = format!(
            "UPDATE {} SET status = $2, updated_at = NOW(), revision = revision + 1
             WHERE id = $1
             RETURNING {}",
            T::TABLE,
            T::COLUMNS
        );
        let updated = sqlx::query_as::<_, T>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: T::ENTITY,
                id,
            })?;
        Ok(updated)
    }

    /// List every snapshot of an entity, newest first.
    pub async fn history<T: Versioned>(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Vec<T::Snapshot>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {}
             WHERE {} = $1
             ORDER BY recorded_at DESC, id DESC",
            T::VERSION_COLUMNS,
            T::VERSION_TABLE,
            T::OWNER_COLUMN
        );
        sqlx::query_as::<_, T::Snapshot>(&query)
            .bind(id)
            .fetch_all(pool)
            .await
    }

    /// Count the snapshots recorded for an entity.
    pub async fn count_snapshots<T: Versioned>(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = $1",
            T::VERSION_TABLE,
            T::OWNER_COLUMN
        );
        let (count,) = sqlx::query_as::<_, (i64,)>(&query)
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

fn conflict<T: Versioned>(id: DbId, expected: i32) -> CoreError {
    CoreError::Conflict(format!(
        "{} {id} was modified concurrently; expected version {expected}",
        T::ENTITY
    ))
}
