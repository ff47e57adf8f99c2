//! Read-only views over the caller's journal: the category graph and the
//! dashboard counts.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use journal_core::graph::{build_tree, CategoryRef, EntryRef};
use journal_core::users::viewer_label;
use journal_db::repositories::{CategoryRepo, EntryRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::auth::find_user;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Dashboard counts for `GET /journal/stats`.
#[derive(Debug, Serialize)]
pub struct JournalStats {
    pub total_entries: i64,
    pub total_categories: i64,
}

/// GET /api/v1/journal/graph
///
/// Root → category → entry graph, recomputed from the caller's rows.
pub async fn get_graph(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = find_user(&state, auth.user_id).await?;
    let entries = EntryRepo::list_for_user(&state.pool, auth.user_id).await?;
    let categories = CategoryRepo::list_for_user(&state.pool, auth.user_id).await?;

    let entry_refs: Vec<EntryRef<'_>> = entries
        .iter()
        .map(|e| EntryRef {
            id: e.id,
            title: &e.title,
            content: &e.content,
            category_id: e.category_id,
        })
        .collect();
    let category_refs: Vec<CategoryRef<'_>> = categories
        .iter()
        .map(|c| CategoryRef {
            id: c.id,
            name: &c.name,
        })
        .collect();

    let label = viewer_label(user.display_name.as_deref(), &user.email);
    let graph = build_tree(&entry_refs, &category_refs, &label);

    Ok(Json(DataResponse { data: graph }))
}

/// GET /api/v1/journal/stats
pub async fn get_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let total_entries = EntryRepo::count_for_user(&state.pool, auth.user_id).await?;
    let total_categories = CategoryRepo::count_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse {
        data: JournalStats {
            total_entries,
            total_categories,
        },
    }))
}
