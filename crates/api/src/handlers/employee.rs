use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tender_core::validation::{validate_person_name, validate_username};
use tender_db::models::employee::CreateEmployee;
use tender_db::repositories::EmployeeRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /users/new
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployee>,
) -> AppResult<impl IntoResponse> {
    validate_username(&input.username)?;
    validate_person_name("first_name", input.first_name.as_deref())?;
    validate_person_name("last_name", input.last_name.as_deref())?;

    let employee = EmployeeRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = %employee.id, username = %employee.username, "Employee created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: employee })))
}
