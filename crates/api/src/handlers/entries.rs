//! Handlers for the `/entries` resource.
//!
//! Creation runs the full categorize-and-persist flow: the caller's category
//! names are fetched, the model suggests a name, the name is resolved to a
//! category (reused or created), and the entry is inserted. Any failing step
//! aborts the request. A category created just before a failed entry insert
//! is left in place.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use journal_core::entries::normalize_entry_text;
use journal_core::error::CoreError;
use journal_core::types::DbId;
use journal_db::models::category::Category;
use journal_db::models::entry::{CreateEntry, Entry, UpdateEntry};
use journal_db::repositories::{CategoryRepo, EntryRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::categorize::suggest_for_owner;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Title/content body shared by create, update and categorize.
///
/// Fields are optional so a missing field is reported the same way as a
/// blank one.
#[derive(Debug, Deserialize)]
pub struct EntryTextRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Result of `POST /entries`: the stored entry and the category it was
/// attached to.
#[derive(Debug, Serialize)]
pub struct CreatedEntry {
    pub entry: Entry,
    pub category: Category,
    /// `true` when the suggestion produced a brand-new category.
    pub category_created: bool,
}

/// POST /api/v1/entries
pub async fn create_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<EntryTextRequest>,
) -> AppResult<impl IntoResponse> {
    let text = normalize_entry_text(input.title.as_deref(), input.content.as_deref())?;

    let suggestion = suggest_for_owner(&state, auth.user_id, &text).await?;

    let resolved = CategoryRepo::resolve(&state.pool, auth.user_id, &suggestion).await?;

    let entry = EntryRepo::create(
        &state.pool,
        &CreateEntry {
            title: text.title,
            content: text.content,
            category_id: Some(resolved.category.id),
            user_id: auth.user_id,
        },
    )
    .await?;

    tracing::info!(
        entry_id = entry.id,
        category_id = resolved.category.id,
        category_created = resolved.created,
        user_id = auth.user_id,
        "Entry created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedEntry {
                entry,
                category: resolved.category,
                category_created: resolved.created,
            },
        }),
    ))
}

/// GET /api/v1/entries
///
/// The caller's entries with their categories, newest first.
pub async fn list_entries(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let entries = EntryRepo::list_with_category(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/entries/{id}
pub async fn get_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = EntryRepo::find_with_category(&state.pool, entry_id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Entry",
            id: entry_id,
        }))?;

    Ok(Json(DataResponse { data: entry }))
}

/// PUT /api/v1/entries/{id}
///
/// Replace title and content. The category is not re-evaluated. Another
/// owner's entry is reported as not found.
pub async fn update_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
    AppJson(input): AppJson<EntryTextRequest>,
) -> AppResult<StatusCode> {
    let text = normalize_entry_text(input.title.as_deref(), input.content.as_deref())?;

    EntryRepo::update(
        &state.pool,
        entry_id,
        auth.user_id,
        &UpdateEntry {
            title: text.title,
            content: text.content,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Entry",
        id: entry_id,
    }))?;

    tracing::info!(entry_id, user_id = auth.user_id, "Entry updated");

    Ok(StatusCode::NO_CONTENT)
}
