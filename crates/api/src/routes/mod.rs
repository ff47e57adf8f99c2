pub mod auth;
pub mod categories;
pub mod entries;
pub mod health;
pub mod journal;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/refresh                  refresh (public)
/// /auth/logout                   logout (requires auth)
/// /auth/me                       current user (requires auth)
///
/// /categorize                    suggest a category name (POST)
///
/// /entries                       list, create (GET, POST)
/// /entries/{id}                  get, update (GET, PUT)
///
/// /categories                    list with entry counts (GET)
///
/// /journal/graph                 root/category/entry graph (GET)
/// /journal/stats                 dashboard counts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/categorize", post(handlers::categorize::categorize))
        .nest("/entries", entries::router())
        .nest("/categories", categories::router())
        .nest("/journal", journal::router())
}
