//! Handler for the categorization endpoint.
//!
//! Suggests a category name for an entry without persisting anything. The
//! submission flow in [`super::entries`] reuses [`suggest_for_owner`].

use axum::extract::State;
use axum::Json;
use journal_core::entries::{normalize_entry_text, EntryText};
use journal_core::types::DbId;
use journal_db::repositories::CategoryRepo;
use journal_llm::suggest_category;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::entries::EntryTextRequest;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `POST /categorize`.
#[derive(Debug, Serialize)]
pub struct CategorizeResponse {
    pub category: String,
}

/// POST /api/v1/categorize
///
/// Returns `{ "category": name }`. Model failures yield `"Uncategorized"`,
/// never an error status.
///
/// The body is checked before the caller: a request that is both anonymous
/// and missing a field gets 400.
pub async fn categorize(
    auth: Result<AuthUser, AppError>,
    State(state): State<AppState>,
    AppJson(input): AppJson<EntryTextRequest>,
) -> AppResult<Json<CategorizeResponse>> {
    let text = normalize_entry_text(input.title.as_deref(), input.content.as_deref())?;
    let auth = auth?;

    let category = suggest_for_owner(&state, auth.user_id, &text).await?;

    tracing::info!(user_id = auth.user_id, category = %category, "Entry categorized");

    Ok(Json(CategorizeResponse { category }))
}

/// Fetch the owner's category names and ask the model for a suggestion.
///
/// Only the name lookup can fail; the model call itself always produces a
/// name.
pub(crate) async fn suggest_for_owner(
    state: &AppState,
    user_id: DbId,
    text: &EntryText,
) -> AppResult<String> {
    let existing = CategoryRepo::list_names(&state.pool, user_id).await?;
    Ok(suggest_category(&state.llm, &text.title, &text.content, &existing).await)
}
