use crate::types::DbId;

/// Domain-level failures shared by every crate in the workspace.
///
/// The API layer maps each variant to an HTTP status; repositories return
/// raw `sqlx::Error` and never construct these directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
