//! HTTP-level tests for tender endpoints, including the versioned edit and
//! rollback flow.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch_json, post, post_json, put};
use sqlx::PgPool;
use uuid::Uuid;

async fn edit(pool: &PgPool, id: &str, name: &str, description: &str) -> StatusCode {
    patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/tenders/{id}/edit"),
        serde_json::json!({"name": name, "description": description}),
    )
    .await
    .status()
}

async fn fetch(pool: &PgPool, id: &str) -> serde_json::Value {
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/tenders/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

// ---------------------------------------------------------------------------
// Creation and listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_tender_defaults(pool: PgPool) {
    let org_id = common::create_organization(&pool, "Acme").await;
    let id = common::create_tender(&pool, &org_id, "Bridge", "alice").await;

    let tender = fetch(&pool, &id).await;
    assert_eq!(tender["name"], "Bridge");
    assert_eq!(tender["status"], "DRAFT");
    assert_eq!(tender["version"], 1);
    assert_eq!(tender["organization_id"], org_id.as_str());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_tender_unknown_organization(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/tenders/new",
        serde_json::json!({
            "name": "Orphan",
            "organization_id": Uuid::new_v4(),
            "creator_username": "alice",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_and_list_my(pool: PgPool) {
    let org_id = common::create_organization(&pool, "Acme").await;
    common::create_tender(&pool, &org_id, "One", "alice").await;
    common::create_tender(&pool, &org_id, "Two", "bob").await;

    let response = get(common::build_test_app(pool.clone()), "/api/tenders").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);

    let response = get(
        common::build_test_app(pool),
        "/api/tenders/my?username=alice",
    )
    .await;
    let json = body_json(response).await;
    let mine = json["data"].as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["name"], "One");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_unknown_tender_returns_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        &format!("/api/tenders/{}", Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_id_is_rejected(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/tenders/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Edit / rollback
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_then_rollback_restores_original(pool: PgPool) {
    let org_id = common::create_organization(&pool, "Acme").await;
    let id = common::create_tender(&pool, &org_id, "A", "alice").await;

    let response = patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/tenders/{id}/edit"),
        serde_json::json!({"name": "B", "description": "changed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "updated");

    let edited = fetch(&pool, &id).await;
    assert_eq!(edited["name"], "B");
    assert_eq!(edited["version"], 2);

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/tenders/{id}/versions"),
    )
    .await;
    let json = body_json(response).await;
    let versions = json["data"].as_array().unwrap();
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0]["version"], 1);
    assert_eq!(versions[0]["name"], "A");

    let response = put(
        common::build_test_app(pool.clone()),
        &format!("/api/tenders/{id}/rollback/1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "rolled back");
    assert_eq!(json["data"]["version"], 1);

    let restored = fetch(&pool, &id).await;
    assert_eq!(restored["name"], "A");
    assert_eq!(restored["description"], "A description");
    assert_eq!(restored["version"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rollback_missing_version_returns_404(pool: PgPool) {
    let org_id = common::create_organization(&pool, "Acme").await;
    let id = common::create_tender(&pool, &org_id, "A", "alice").await;

    let response = put(
        common::build_test_app(pool.clone()),
        &format!("/api/tenders/{id}/rollback/5"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let tender = fetch(&pool, &id).await;
    assert_eq!(tender["name"], "A");
    assert_eq!(tender["version"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rollback_to_zero_is_rejected(pool: PgPool) {
    let org_id = common::create_organization(&pool, "Acme").await;
    let id = common::create_tender(&pool, &org_id, "A", "alice").await;

    let response = put(
        common::build_test_app(pool),
        &format!("/api/tenders/{id}/rollback/0"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_unknown_tender_returns_404(pool: PgPool) {
    let id = Uuid::new_v4().to_string();
    assert_eq!(edit(&pool, &id, "B", "x").await, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_edit_missing_field_is_rejected(pool: PgPool) {
    let org_id = common::create_organization(&pool, "Acme").await;
    let id = common::create_tender(&pool, &org_id, "A", "alice").await;

    let response = patch_json(
        common::build_test_app(pool.clone()),
        &format!("/api/tenders/{id}/edit"),
        serde_json::json!({"name": "B"}),
    )
    .await;
    assert!(response.status().is_client_error());
    assert_eq!(fetch(&pool, &id).await["version"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_successive_edits_accumulate_history(pool: PgPool) {
    let org_id = common::create_organization(&pool, "Acme").await;
    let id = common::create_tender(&pool, &org_id, "A", "alice").await;

    for name in ["B", "C", "D"] {
        assert_eq!(edit(&pool, &id, name, "x").await, StatusCode::OK);
    }
    assert_eq!(fetch(&pool, &id).await["version"], 4);

    let response = get(
        common::build_test_app(pool),
        &format!("/api/tenders/{id}/versions"),
    )
    .await;
    let json = body_json(response).await;
    let versions: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["version"].as_i64().unwrap())
        .collect();
    assert_eq!(versions, vec![3, 2, 1]);
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_publish_and_close(pool: PgPool) {
    let org_id = common::create_organization(&pool, "Acme").await;
    let id = common::create_tender(&pool, &org_id, "A", "alice").await;

    let response = post(
        common::build_test_app(pool.clone()),
        &format!("/api/tenders/{id}/publish"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "published");
    assert_eq!(fetch(&pool, &id).await["status"], "PUBLISHED");

    let response = post(
        common::build_test_app(pool.clone()),
        &format!("/api/tenders/{id}/close"),
    )
    .await;
    assert_eq!(body_json(response).await["data"]["status"], "closed");

    let tender = fetch(&pool, &id).await;
    assert_eq!(tender["status"], "CLOSED");
    assert_eq!(tender["version"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_publish_unknown_tender_returns_404(pool: PgPool) {
    let response = post(
        common::build_test_app(pool),
        &format!("/api/tenders/{}/publish", Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
