//! Journal entry model and DTOs.

use journal_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `entries` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub title: String,
    pub content: String,
    /// `None` means uncategorized.
    pub category_id: Option<DbId>,
    pub user_id: DbId,
    pub created_at: Timestamp,
}

/// Category fields embedded in an entry listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: DbId,
    pub name: String,
}

/// An entry joined with its category (if any), as listed to the owner.
#[derive(Debug, Clone, Serialize)]
pub struct EntryWithCategory {
    #[serde(flatten)]
    pub entry: Entry,
    pub category: Option<CategorySummary>,
}

/// Flat row produced by the `entries LEFT JOIN categories` query.
#[derive(Debug, FromRow)]
pub(crate) struct EntryWithCategoryRow {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category_id: Option<DbId>,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub category_name: Option<String>,
}

impl From<EntryWithCategoryRow> for EntryWithCategory {
    fn from(row: EntryWithCategoryRow) -> Self {
        let category = match (row.category_id, row.category_name) {
            (Some(id), Some(name)) => Some(CategorySummary { id, name }),
            _ => None,
        };
        Self {
            entry: Entry {
                id: row.id,
                title: row.title,
                content: row.content,
                category_id: row.category_id,
                user_id: row.user_id,
                created_at: row.created_at,
            },
            category,
        }
    }
}

/// DTO for inserting an entry. `title` and `content` must already be trimmed.
#[derive(Debug, Clone)]
pub struct CreateEntry {
    pub title: String,
    pub content: String,
    pub category_id: Option<DbId>,
    pub user_id: DbId,
}

/// DTO for editing an entry. Category assignment is not editable.
#[derive(Debug, Clone)]
pub struct UpdateEntry {
    pub title: String,
    pub content: String,
}
