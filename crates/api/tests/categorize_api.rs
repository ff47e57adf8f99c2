//! HTTP-level integration tests for `POST /categorize`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_entry, post_json, post_json_auth, register_token, spawn_llm, spawn_llm_raw};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn returns_the_trimmed_suggestion(pool: PgPool) {
    let llm = spawn_llm("  Health & Fitness \n").await;
    let app = common::build_test_app(pool, &llm.url);
    let token = register_token(app.clone(), "a@example.com").await;

    let response = post_json_auth(
        app,
        "/api/v1/categorize",
        json!({ "title": "Gym", "content": "Leg day" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "category": "Health & Fitness" })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn does_not_persist_anything(pool: PgPool) {
    let llm = spawn_llm("Travel Plans").await;
    let app = common::build_test_app(pool.clone(), &llm.url);
    let token = register_token(app.clone(), "a@example.com").await;

    let response = post_json_auth(
        app,
        "/api/v1/categorize",
        json!({ "title": "Lisbon", "content": "Flights" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (categories,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&pool)
        .await
        .unwrap();
    let (entries,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM entries")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(categories, 0);
    assert_eq!(entries, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn model_failure_returns_uncategorized_with_200(pool: PgPool) {
    let llm = spawn_llm_raw(StatusCode::UNAUTHORIZED, r#"{"error":"bad key"}"#.to_string()).await;
    let app = common::build_test_app(pool, &llm.url);
    let token = register_token(app.clone(), "a@example.com").await;

    let response = post_json_auth(
        app,
        "/api/v1/categorize",
        json!({ "title": "t", "content": "c" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["category"], "Uncategorized");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_fields_are_bad_request(pool: PgPool) {
    let llm = spawn_llm("Work Ideas").await;
    let app = common::build_test_app(pool, &llm.url);
    let token = register_token(app.clone(), "a@example.com").await;

    let response = post_json_auth(
        app,
        "/api/v1/categorize",
        json!({ "title": "only a title" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Title and content are required"
    );
    assert_eq!(llm.calls(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn anonymous_caller_is_unauthorized(pool: PgPool) {
    let llm = spawn_llm("Work Ideas").await;
    let app = common::build_test_app(pool, &llm.url);

    let response = post_json(
        app,
        "/api/v1/categorize",
        json!({ "title": "t", "content": "c" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(llm.calls(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn anonymous_caller_with_missing_field_is_bad_request(pool: PgPool) {
    let llm = spawn_llm("Work Ideas").await;
    let app = common::build_test_app(pool, &llm.url);

    let response = post_json(
        app,
        "/api/v1/categorize",
        json!({ "title": "only a title" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Title and content are required"
    );
    assert_eq!(llm.calls(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn works_alongside_existing_categories(pool: PgPool) {
    let llm = spawn_llm("Work Ideas").await;
    let app = common::build_test_app(pool, &llm.url);
    let token = register_token(app.clone(), "a@example.com").await;
    create_entry(app.clone(), &token, "Pitch", "Idea").await;

    let response = post_json_auth(
        app,
        "/api/v1/categorize",
        json!({ "title": "Roadmap", "content": "Q3" }),
        &token,
    )
    .await;

    assert_eq!(body_json(response).await["category"], "Work Ideas");
    assert_eq!(llm.calls(), 2);
}
