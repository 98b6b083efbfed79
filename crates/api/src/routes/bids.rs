use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::bid;
use crate::state::AppState;

/// Routes mounted at `/bids`.
///
/// The first path segment is a tender id for `list` and `reviews` and a
/// bid id everywhere else; both share the `{id}` parameter name.
///
/// ```text
/// POST   /new                                               create_bid
/// GET    /my?username=                                      list_my_bids
/// GET    /{id}/list                                         list_tender_bids
/// GET    /{id}/reviews?author_username=&organization_id=    list_bid_reviews
/// PATCH  /{id}/edit                                         edit_bid
/// PUT    /{id}/rollback/{version}                           rollback_bid
/// GET    /{id}/versions                                     list_bid_versions
/// POST   /{id}/publish                                      publish_bid
/// POST   /{id}/close                                        close_bid
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", post(bid::create_bid))
        .route("/my", get(bid::list_my_bids))
        .route("/{id}/list", get(bid::list_tender_bids))
        .route("/{id}/reviews", get(bid::list_bid_reviews))
        .route("/{id}/edit", patch(bid::edit_bid))
        .route("/{id}/rollback/{version}", put(bid::rollback_bid))
        .route("/{id}/versions", get(bid::list_bid_versions))
        .route("/{id}/publish", post(bid::publish_bid))
        .route("/{id}/close", post(bid::close_bid))
}
