//! Shared harness for the HTTP integration tests.
//!
//! Builds the production router against a per-test database and a local
//! stand-in for the chat-completions endpoint.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use journal_api::auth::jwt::JwtConfig;
use journal_api::config::ServerConfig;
use journal_api::router::build_app_router;
use journal_api::state::AppState;
use journal_llm::{LlmClient, LlmConfig};

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` pointing the model client at `llm_base_url`.
pub fn test_config(llm_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        llm: LlmConfig::with_base_url(llm_base_url),
    }
}

/// Build the full application router, using the given database pool and
/// model endpoint.
pub fn build_test_app(pool: PgPool, llm_base_url: &str) -> Router {
    let config = test_config(llm_base_url);
    let state = AppState {
        pool,
        llm: Arc::new(LlmClient::new(config.llm.clone())),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Model stand-in
// ---------------------------------------------------------------------------

/// A running chat-completions mock and the number of calls it has served.
pub struct LlmMock {
    pub url: String,
    pub calls: Arc<AtomicUsize>,
}

impl LlmMock {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Serve `/chat/completions` answering every request with `category` as the
/// assistant message.
pub async fn spawn_llm(category: &str) -> LlmMock {
    let body = json!({
        "choices": [{ "message": { "role": "assistant", "content": category } }]
    })
    .to_string();
    spawn_llm_raw(StatusCode::OK, body).await
}

/// Serve `/chat/completions` answering every request with `status` and `body`.
pub async fn spawn_llm_raw(status: StatusCode, body: String) -> LlmMock {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let app = Router::new().route(
        "/chat/completions",
        post(move || {
            let body = body.clone();
            counter.fetch_add(1, Ordering::SeqCst);
            async move { (status, [(CONTENT_TYPE, "application/json")], body) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    LlmMock {
        url: format!("http://{addr}"),
        calls,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

/// Send a request with a raw, possibly malformed, JSON body.
pub async fn post_raw_auth(app: Router, uri: &str, raw: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(raw.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register an account through the API and return the full auth response.
pub async fn register(app: Router, email: &str, display_name: Option<&str>) -> Value {
    let body = json!({
        "email": email,
        "password": TEST_PASSWORD,
        "display_name": display_name,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Register an account and return its access token.
pub async fn register_token(app: Router, email: &str) -> String {
    let json = register(app, email, None).await;
    json["access_token"].as_str().unwrap().to_string()
}

/// Submit an entry and return the `data` object of the response.
pub async fn create_entry(app: Router, token: &str, title: &str, content: &str) -> Value {
    let response = post_json_auth(
        app,
        "/api/v1/entries",
        json!({ "title": title, "content": content }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
