//! Route definitions for the `/entries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

/// Routes mounted at `/entries`. There is no delete.
///
/// ```text
/// GET  /      -> list_entries
/// POST /      -> create_entry
/// GET  /{id}  -> get_entry
/// PUT  /{id}  -> update_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(entries::list_entries).post(entries::create_entry))
        .route("/{id}", get(entries::get_entry).put(entries::update_entry))
}
