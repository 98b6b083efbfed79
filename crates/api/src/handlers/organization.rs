//! Handlers for organizations and their responsible employees.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tender_core::error::CoreError;
use tender_core::organization::OrganizationType;
use tender_core::validation::validate_name;
use tender_db::models::organization::{AssignResponsible, CreateOrganization};
use tender_db::repositories::{EmployeeRepo, OrganizationRepo, OrganizationResponsibleRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /organizations/new
pub async fn create_organization(
    State(state): State<AppState>,
    Json(input): Json<CreateOrganization>,
) -> AppResult<impl IntoResponse> {
    validate_name(&input.name)?;
    let org_type = OrganizationType::parse(&input.org_type)?;

    let organization = OrganizationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        organization_id = %organization.id,
        org_type = org_type.as_str(),
        "Organization created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: organization })))
}

/// POST /organizations/assign_responsible
///
/// Both the organization and the employee must exist; assigning the same
/// pair twice is rejected with 409.
pub async fn assign_responsible(
    State(state): State<AppState>,
    Json(input): Json<AssignResponsible>,
) -> AppResult<impl IntoResponse> {
    OrganizationRepo::find_by_id(&state.pool, input.organization_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id: input.organization_id,
        }))?;
    EmployeeRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: input.user_id,
        }))?;

    let link = OrganizationResponsibleRepo::assign(&state.pool, &input).await?;

    tracing::info!(
        organization_id = %link.organization_id,
        user_id = %link.user_id,
        "Responsible employee assigned"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}
