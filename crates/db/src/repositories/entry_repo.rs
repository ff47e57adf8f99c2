//! Repository for the `entries` table.

use journal_core::types::DbId;
use sqlx::PgPool;

use crate::models::entry::{
    CreateEntry, Entry, EntryWithCategory, EntryWithCategoryRow, UpdateEntry,
};

/// Column list for `entries` queries.
const COLUMNS: &str = "id, title, content, category_id, user_id, created_at";

/// Select list for the entry/category join.
const JOINED_COLUMNS: &str = "\
    e.id, e.title, e.content, e.category_id, e.user_id, e.created_at, \
    c.name AS category_name";

/// Provides owner-scoped entry CRUD. There is no delete.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert a new entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEntry) -> Result<Entry, sqlx::Error> {
        let query = format!(
            "INSERT INTO entries (title, content, category_id, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find one of the owner's entries. Another owner's entry reads as `None`.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find one of the owner's entries joined with its category.
    pub async fn find_with_category(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<EntryWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM entries e
             LEFT JOIN categories c ON c.id = e.category_id AND c.user_id = e.user_id
             WHERE e.id = $1 AND e.user_id = $2"
        );
        let row = sqlx::query_as::<_, EntryWithCategoryRow>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(EntryWithCategory::from))
    }

    /// All of the owner's entries, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Entry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM entries
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// All of the owner's entries joined with their categories, newest first.
    pub async fn list_with_category(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<EntryWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM entries e
             LEFT JOIN categories c ON c.id = e.category_id AND c.user_id = e.user_id
             WHERE e.user_id = $1
             ORDER BY e.created_at DESC, e.id DESC"
        );
        let rows = sqlx::query_as::<_, EntryWithCategoryRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(EntryWithCategory::from).collect())
    }

    /// Replace an entry's title and content. `category_id` and `created_at`
    /// are untouched.
    ///
    /// Returns `None` if the entry does not exist or belongs to another owner.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdateEntry,
    ) -> Result<Option<Entry>, sqlx::Error> {
        let query = format!(
            "UPDATE entries SET
                title = $3,
                content = $4
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Number of entries the owner has.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM entries WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
