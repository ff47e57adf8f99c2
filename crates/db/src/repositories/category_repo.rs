//! Repository for the `categories` table.
//!
//! Categories are created on first use of a name by an owner and never
//! updated. [`CategoryRepo::resolve`] implements that create-or-reuse step.

use journal_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CategoryWithCount, CreateCategory, ResolvedCategory};

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name, user_id, created_at";

/// Provides owner-scoped category lookups and creation.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find the owner's category with exactly this name (case-sensitive).
    ///
    /// Duplicate names can exist after concurrent submissions; the oldest row
    /// wins so repeated lookups stay stable.
    pub async fn find_by_name(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE user_id = $1 AND name = $2
             ORDER BY id
             LIMIT 1"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Reuse the owner's category named `name`, or insert one.
    ///
    /// The lookup and the insert are separate statements; two concurrent
    /// calls with the same new name can both insert.
    pub async fn resolve(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
    ) -> Result<ResolvedCategory, sqlx::Error> {
        if let Some(category) = Self::find_by_name(pool, user_id, name).await? {
            return Ok(ResolvedCategory {
                category,
                created: false,
            });
        }

        let category = Self::create(
            pool,
            &CreateCategory {
                name: name.to_string(),
                user_id,
            },
        )
        .await?;

        tracing::debug!(category_id = category.id, user_id, "Category created");

        Ok(ResolvedCategory {
            category,
            created: true,
        })
    }

    /// Names of all the owner's categories, oldest first.
    pub async fn list_names(pool: &PgPool, user_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM categories WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// All of the owner's categories, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// All of the owner's categories with their entry counts, newest first.
    pub async fn list_with_counts(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CategoryWithCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryWithCount>(
            "SELECT c.id, c.name, c.user_id, c.created_at,
                    COUNT(e.id) AS entry_count
             FROM categories c
             LEFT JOIN entries e ON e.category_id = c.id AND e.user_id = c.user_id
             WHERE c.user_id = $1
             GROUP BY c.id
             ORDER BY c.created_at DESC, c.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Number of categories the owner has.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
