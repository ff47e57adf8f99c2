use axum::routing::get;
use axum::Router;

use crate::handlers::journal;
use crate::state::AppState;

/// Routes mounted at `/journal`.
///
/// ```text
/// GET /graph -> get_graph
/// GET /stats -> get_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/graph", get(journal::get_graph))
        .route("/stats", get(journal::get_stats))
}
