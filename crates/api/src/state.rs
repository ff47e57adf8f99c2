use std::sync::Arc;

use journal_llm::LlmClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Holds no per-request or cross-request mutable data.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: journal_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Client for the hosted categorization model.
    pub llm: Arc<LlmClient>,
}
