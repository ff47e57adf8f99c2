//! Category model and DTOs.

use journal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table. Categories are never updated.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// A category plus the number of the owner's entries attached to it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryWithCount {
    pub id: DbId,
    pub name: String,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub entry_count: i64,
}

/// DTO for inserting a category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub user_id: DbId,
}

/// Outcome of create-or-reuse resolution.
#[derive(Debug, Clone)]
pub struct ResolvedCategory {
    pub category: Category,
    /// `true` when no matching row existed and one was inserted.
    pub created: bool,
}
