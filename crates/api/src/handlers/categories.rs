//! Handlers for the `/categories` resource. Categories are read-only here;
//! they are only created by entry submission.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use journal_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// The caller's categories with entry counts, newest first.
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list_with_counts(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse { data: categories }))
}
