//! Tests for `suggest_category` against an in-process chat-completions mock.
//!
//! Covers the trimmed success path, the request sent upstream, and every
//! failure mode collapsing to the fallback label.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use journal_llm::{suggest_category, LlmClient, LlmConfig, LlmError, FALLBACK_CATEGORY};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Mock server
// ---------------------------------------------------------------------------

/// What the mock saw on its last request.
#[derive(Default)]
struct Captured {
    body: Option<Value>,
    authorization: Option<String>,
}

/// Serve `/chat/completions` on an ephemeral port, answering every request
/// with `status` and the raw `body`. Returns the base URL and the capture slot.
async fn spawn_mock(status: StatusCode, body: &str) -> (String, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let slot = Arc::clone(&captured);
    let body = body.to_string();

    let app = Router::new().route(
        "/chat/completions",
        post(move |headers: HeaderMap, Json(request): Json<Value>| {
            let slot = Arc::clone(&slot);
            let body = body.clone();
            async move {
                {
                    let mut captured = slot.lock().unwrap();
                    captured.body = Some(request);
                    captured.authorization = headers
                        .get(AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                }
                (status, [(CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}

fn completion(content: &str) -> String {
    json!({
        "id": "gen-1",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}

fn client_for(base_url: &str) -> LlmClient {
    LlmClient::new(LlmConfig::with_base_url(base_url))
}

/// Base URL of a port that was bound and released, so connecting is refused.
async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Success path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn returns_trimmed_model_text() {
    let (url, _) = spawn_mock(StatusCode::OK, &completion("  \n Work Ideas \t\n")).await;

    let category = suggest_category(&client_for(&url), "Pitch", "New product idea", &[]).await;

    assert_eq!(category, "Work Ideas");
}

#[tokio::test]
async fn keeps_interior_text_byte_for_byte() {
    let (url, _) = spawn_mock(StatusCode::OK, &completion(" health  &  FITNESS!! ")).await;

    let category = suggest_category(&client_for(&url), "Gym", "Leg day", &[]).await;

    assert_eq!(category, "health  &  FITNESS!!");
}

#[tokio::test]
async fn sends_model_messages_and_key() {
    let (url, captured) = spawn_mock(StatusCode::OK, &completion("Travel Plans")).await;
    let config = LlmConfig {
        base_url: url,
        api_key: Some("sk-test".to_string()),
        model: "test/model".to_string(),
    };
    let existing = vec!["Travel Plans".to_string()];

    suggest_category(&LlmClient::new(config), "Lisbon", "Book flights", &existing).await;

    let captured = captured.lock().unwrap();
    assert_eq!(captured.authorization.as_deref(), Some("Bearer sk-test"));
    let body = captured.body.as_ref().unwrap();
    assert_eq!(body["model"], "test/model");
    assert_eq!(body["stream"], false);
    assert_eq!(body["messages"][0]["role"], "system");
    assert!(body["messages"][0]["content"]
        .as_str()
        .unwrap()
        .contains("- Travel Plans"));
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(
        body["messages"][1]["content"],
        "Title: Lisbon\n\nContent: Book flights"
    );
}

#[tokio::test]
async fn omits_authorization_without_key() {
    let (url, captured) = spawn_mock(StatusCode::OK, &completion("Learning Notes")).await;

    suggest_category(&client_for(&url), "Rust", "Lifetimes", &[]).await;

    assert!(captured.lock().unwrap().authorization.is_none());
}

// ---------------------------------------------------------------------------
// Failure injection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn provider_error_falls_back() {
    let (url, _) = spawn_mock(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":{"message":"boom"}}"#,
    )
    .await;

    let category = suggest_category(&client_for(&url), "t", "c", &[]).await;

    assert_eq!(category, FALLBACK_CATEGORY);
}

#[tokio::test]
async fn unauthorized_falls_back() {
    let (url, _) = spawn_mock(StatusCode::UNAUTHORIZED, r#"{"error":"no key"}"#).await;

    assert_eq!(
        suggest_category(&client_for(&url), "t", "c", &[]).await,
        "Uncategorized"
    );
}

#[tokio::test]
async fn malformed_json_falls_back() {
    let (url, _) = spawn_mock(StatusCode::OK, "this is not json").await;

    assert_eq!(
        suggest_category(&client_for(&url), "t", "c", &[]).await,
        FALLBACK_CATEGORY
    );
}

#[tokio::test]
async fn missing_choices_falls_back() {
    let (url, _) = spawn_mock(StatusCode::OK, r#"{"choices":[]}"#).await;

    assert_eq!(
        suggest_category(&client_for(&url), "t", "c", &[]).await,
        FALLBACK_CATEGORY
    );
}

#[tokio::test]
async fn null_content_falls_back() {
    let (url, _) = spawn_mock(
        StatusCode::OK,
        r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#,
    )
    .await;

    assert_eq!(
        suggest_category(&client_for(&url), "t", "c", &[]).await,
        FALLBACK_CATEGORY
    );
}

#[tokio::test]
async fn unreachable_endpoint_falls_back() {
    let url = unreachable_url().await;

    assert_eq!(
        suggest_category(&client_for(&url), "t", "c", &[]).await,
        FALLBACK_CATEGORY
    );
}

// ---------------------------------------------------------------------------
// Client errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_reports_status_and_body() {
    let (url, _) = spawn_mock(StatusCode::BAD_GATEWAY, "upstream down").await;

    let err = client_for(&url).complete("sys", "user").await.unwrap_err();

    assert_matches!(err, LlmError::Api { status: 502, body } if body == "upstream down");
}

#[tokio::test]
async fn complete_reports_empty_response() {
    let (url, _) = spawn_mock(StatusCode::OK, r#"{"choices":[]}"#).await;

    let err = client_for(&url).complete("sys", "user").await.unwrap_err();

    assert_matches!(err, LlmError::EmptyResponse);
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let (url, _) = spawn_mock(StatusCode::OK, &completion("Work Ideas")).await;

    let text = client_for(&format!("{url}/"))
        .complete("sys", "user")
        .await
        .unwrap();

    assert_eq!(text, "Work Ideas");
}
