//! Handlers for tenders: creation, listings, versioned edit and rollback,
//! version history, and publish/close transitions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use tender_core::error::CoreError;
use tender_core::status::LifecycleStatus;
use tender_core::types::DbId;
use tender_core::validation::{validate_name, validate_status, validate_username};
use tender_db::models::tender::{CreateTender, Tender, TenderVersion};
use tender_db::repositories::{OrganizationRepo, TenderRepo};
use tender_db::versioning::{EditEntity, VersioningEngine};

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, StatusAck};
use crate::state::AppState;

/// Query parameters for `GET /tenders/my`.
#[derive(Debug, Deserialize)]
pub struct MyTendersParams {
    pub username: String,
}

/// POST /tenders/new
///
/// Status defaults to `DRAFT` when omitted. The owning organization must
/// exist.
pub async fn create_tender(
    State(state): State<AppState>,
    Json(input): Json<CreateTender>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name)?;
    validate_username(&input.creator_username)?;
    if let Some(ref status) = input.status {
        validate_status(status)?;
    }

    OrganizationRepo::find_by_id(&state.pool, input.organization_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id: input.organization_id,
        }))?;

    let tender = TenderRepo::create(&state.pool, &input).await?;

    tracing::info!(
        tender_id = %tender.id,
        organization_id = %input.organization_id,
        creator = %tender.creator_username,
        "Tender created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: tender })))
}

/// GET /tenders
pub async fn list_tenders(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Tender>>>> {
    let tenders = TenderRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tenders }))
}

/// GET /tenders/my?username=
pub async fn list_my_tenders(
    State(state): State<AppState>,
    Query(params): Query<MyTendersParams>,
) -> AppResult<Json<DataResponse<Vec<Tender>>>> {
    validate_username(&params.username)?;
    let tenders = TenderRepo::list_by_creator(&state.pool, &params.username).await?;
    Ok(Json(DataResponse { data: tenders }))
}

/// GET /tenders/{id}
pub async fn get_tender(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Tender>>> {
    let tender = TenderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tender",
            id,
        }))?;
    Ok(Json(DataResponse { data: tender }))
}

/// PATCH /tenders/{id}/edit
///
/// Records the current state as a snapshot, then replaces name and
/// description and bumps the version.
pub async fn edit_tender(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EditEntity>,
) -> AppResult<Json<DataResponse<StatusAck>>> {
    validate_name(&input.name)?;

    let tender = VersioningEngine::edit::<Tender>(&state.pool, id, &input).await?;

    tracing::info!(tender_id = %id, version = ?tender.version, "Tender edited");

    Ok(Json(DataResponse {
        data: StatusAck::new("updated"),
    }))
}

/// PUT /tenders/{id}/rollback/{version}
pub async fn rollback_tender(
    State(state): State<AppState>,
    Path((id, version)): Path<(DbId, i32)>,
) -> AppResult<Json<DataResponse<StatusAck>>> {
    VersioningEngine::rollback::<Tender>(&state.pool, id, version).await?;

    tracing::info!(tender_id = %id, version, "Tender rolled back");

    Ok(Json(DataResponse {
        data: StatusAck::with_version(LifecycleStatus::RolledBack.ack(), version),
    }))
}

/// GET /tenders/{id}/versions
///
/// Lists the recorded snapshots, newest first.
pub async fn list_tender_versions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TenderVersion>>>> {
    TenderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tender",
            id,
        }))?;

    let versions = VersioningEngine::history::<Tender>(&state.pool, id).await?;
    Ok(Json(DataResponse { data: versions }))
}

/// POST /tenders/{id}/publish
pub async fn publish_tender(
    state: State<AppState>,
    id: Path<DbId>,
) -> AppResult<Json<DataResponse<StatusAck>>> {
    set_tender_status(state, id, LifecycleStatus::Published).await
}

/// POST /tenders/{id}/close
pub async fn close_tender(
    state: State<AppState>,
    id: Path<DbId>,
) -> AppResult<Json<DataResponse<StatusAck>>> {
    set_tender_status(state, id, LifecycleStatus::Closed).await
}

async fn set_tender_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    status: LifecycleStatus,
) -> AppResult<Json<DataResponse<StatusAck>>> {
    VersioningEngine::set_status::<Tender>(&state.pool, id, status).await?;

    tracing::info!(tender_id = %id, status = %status, "Tender status changed");

    Ok(Json(DataResponse {
        data: StatusAck::new(status.ack()),
    }))
}
