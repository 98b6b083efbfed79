//! Handlers for bids. Edit, rollback and status transitions mirror the
//! tender handlers and share the same versioning engine.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use tender_core::error::CoreError;
use tender_core::status::LifecycleStatus;
use tender_core::types::DbId;
use tender_core::validation::{validate_name, validate_status, validate_username};
use tender_db::models::bid::{Bid, BidVersion, CreateBid};
use tender_db::repositories::{BidRepo, TenderRepo};
use tender_db::versioning::{EditEntity, VersioningEngine};

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, StatusAck};
use crate::state::AppState;

/// Query parameters for `GET /bids/my`.
#[derive(Debug, Deserialize)]
pub struct MyBidsParams {
    pub username: String,
}

/// Query parameters for `GET /bids/{tender_id}/reviews`.
#[derive(Debug, Deserialize)]
pub struct ReviewParams {
    pub author_username: String,
    pub organization_id: DbId,
}

/// POST /bids/new
pub async fn create_bid(
    State(state): State<AppState>,
    Json(input): Json<CreateBid>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name)?;
    validate_username(&input.creator_username)?;
    if let Some(ref status) = input.status {
        validate_status(status)?;
    }
    ensure_tender_exists(&state.pool, input.tender_id).await?;

    let bid = BidRepo::create(&state.pool, &input).await?;

    tracing::info!(
        bid_id = %bid.id,
        tender_id = %input.tender_id,
        organization_id = %input.organization_id,
        "Bid created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: bid })))
}

/// GET /bids/my?username=
pub async fn list_my_bids(
    State(state): State<AppState>,
    Query(params): Query<MyBidsParams>,
) -> AppResult<Json<DataResponse<Vec<Bid>>>> {
    validate_username(&params.username)?;
    let bids = BidRepo::list_by_creator(&state.pool, &params.username).await?;
    Ok(Json(DataResponse { data: bids }))
}

/// GET /bids/{tender_id}/list
pub async fn list_tender_bids(
    State(state): State<AppState>,
    Path(tender_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Bid>>>> {
    ensure_tender_exists(&state.pool, tender_id).await?;
    let bids = BidRepo::list_by_tender(&state.pool, tender_id).await?;
    Ok(Json(DataResponse { data: bids }))
}

/// GET /bids/{tender_id}/reviews?author_username=&organization_id=
pub async fn list_bid_reviews(
    State(state): State<AppState>,
    Path(tender_id): Path<DbId>,
    Query(params): Query<ReviewParams>,
) -> AppResult<Json<DataResponse<Vec<Bid>>>> {
    validate_username(&params.author_username)?;
    ensure_tender_exists(&state.pool, tender_id).await?;

    let bids = BidRepo::list_for_review(
        &state.pool,
        tender_id,
        &params.author_username,
        params.organization_id,
    )
    .await?;
    Ok(Json(DataResponse { data: bids }))
}

/// PATCH /bids/{id}/edit
pub async fn edit_bid(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EditEntity>,
) -> AppResult<Json<DataResponse<StatusAck>>> {
    validate_name(&input.name)?;

    let bid = VersioningEngine::edit::<Bid>(&state.pool, id, &input).await?;

    tracing::info!(bid_id = %id, version = ?bid.version, "Bid edited");

    Ok(Json(DataResponse {
        data: StatusAck::new("updated"),
    }))
}

/// PUT /bids/{id}/rollback/{version}
pub async fn rollback_bid(
    State(state): State<AppState>,
    Path((id, version)): Path<(DbId, i32)>,
) -> AppResult<Json<DataResponse<StatusAck>>> {
    VersioningEngine::rollback::<Bid>(&state.pool, id, version).await?;

    tracing::info!(bid_id = %id, version, "Bid rolled back");

    Ok(Json(DataResponse {
        data: StatusAck::with_version(LifecycleStatus::RolledBack.ack(), version),
    }))
}

/// GET /bids/{id}/versions
pub async fn list_bid_versions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<BidVersion>>>> {
    BidRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;

    let versions = VersioningEngine::history::<Bid>(&state.pool, id).await?;
    Ok(Json(DataResponse { data: versions }))
}

/// POST /bids/{id}/publish
pub async fn publish_bid(
    state: State<AppState>,
    id: Path<DbId>,
) -> AppResult<Json<DataResponse<StatusAck>>> {
    set_bid_status(state, id, LifecycleStatus::Published).await
}

/// POST /bids/{id}/close
pub async fn close_bid(
    state: State<AppState>,
    id: Path<DbId>,
) -> AppResult<Json<DataResponse<StatusAck>>> {
    set_bid_status(state, id, LifecycleStatus::Closed).await
}

async fn set_bid_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    status: LifecycleStatus,
) -> AppResult<Json<DataResponse<StatusAck>>> {
    VersioningEngine::set_status::<Bid>(&state.pool, id, status).await?;

    tracing::info!(bid_id = %id, status = %status, "Bid status changed");

    Ok(Json(DataResponse {
        data: StatusAck::new(status.ack()),
    }))
}

/// Fetch a tender by ID or return 404.
async fn ensure_tender_exists(pool: &sqlx::PgPool, tender_id: DbId) -> AppResult<()> {
    TenderRepo::find_by_id(pool, tender_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tender",
            id: tender_id,
        }))?;
    Ok(())
}
