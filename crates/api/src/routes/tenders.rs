use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::tender;
use crate::state::AppState;

/// Routes mounted at `/tenders`.
///
/// ```text
/// POST   /new                          create_tender
/// GET    /                             list_tenders
/// GET    /my?username=                 list_my_tenders
/// GET    /{id}                         get_tender
/// PATCH  /{id}/edit                    edit_tender
/// PUT    /{id}/rollback/{version}      rollback_tender
/// GET    /{id}/versions                list_tender_versions
/// POST   /{id}/publish                 publish_tender
/// POST   /{id}/close                   close_tender
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tender::list_tenders))
        .route("/new", post(tender::create_tender))
        .route("/my", get(tender::list_my_tenders))
        .route("/{id}", get(tender::get_tender))
        .route("/{id}/edit", patch(tender::edit_tender))
        .route("/{id}/rollback/{version}", put(tender::rollback_tender))
        .route("/{id}/versions", get(tender::list_tender_versions))
        .route("/{id}/publish", post(tender::publish_tender))
        .route("/{id}/close", post(tender::close_tender))
}
