pub mod bids;
pub mod health;
pub mod organizations;
pub mod tenders;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ping                                            liveness
///
/// /organizations/new                               create organization
/// /organizations/assign_responsible                link employee to organization
///
/// /users/new                                       create employee
///
/// /tenders                                         list
/// /tenders/new                                     create
/// /tenders/my                                      list by creator
/// /tenders/{id}                                    get
/// /tenders/{id}/edit                               versioned edit (PATCH)
/// /tenders/{id}/rollback/{version}                 rollback (PUT)
/// /tenders/{id}/versions                           snapshot history
/// /tenders/{id}/publish                            publish (POST)
/// /tenders/{id}/close                              close (POST)
///
/// /bids/new                                        create
/// /bids/my                                         list by creator
/// /bids/{tender_id}/list                           bids on a tender
/// /bids/{tender_id}/reviews                        filtered by author and organization
/// /bids/{id}/edit                                  versioned edit (PATCH)
/// /bids/{id}/rollback/{version}                    rollback (PUT)
/// /bids/{id}/versions                              snapshot history
/// /bids/{id}/publish                               publish (POST)
/// /bids/{id}/close                                 close (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .nest("/organizations", organizations::router())
        .nest("/users", users::router())
        .nest("/tenders", tenders::router())
        .nest("/bids", bids::router())
}
