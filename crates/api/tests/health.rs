mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_reports_database(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ping(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/ping").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "ok");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_request_id_is_propagated(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/ping").await;
    assert!(response.headers().contains_key("x-request-id"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_route_returns_404(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/nothing-here").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
