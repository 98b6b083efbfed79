use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Routes mounted at `/organizations`.
///
/// ```text
/// POST   /new                     create_organization
/// POST   /assign_responsible      assign_responsible
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", post(handlers::organization::create_organization))
        .route(
            "/assign_responsible",
            post(handlers::organization::assign_responsible),
        )
}
