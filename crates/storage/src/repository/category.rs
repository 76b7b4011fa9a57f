use sqlx::SqlitePool;

use crate::dto::category::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::error::{Result, StorageError};
use crate::models::Category;

/// Repository for Category database operations
pub struct CategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every category.
    //
    // TODO: scope this to one enduro; today the category pages and the
    // competitor forms show categories from every enduro.
    pub async fn list_all(&self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, enduro_id, name
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a category by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, enduro_id, name
            FROM categories
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("category"))?;

        Ok(category)
    }

    /// Create a category for an enduro
    pub async fn create(&self, enduro_id: i64, req: &CreateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (enduro_id, name)
            VALUES (?1, ?2)
            RETURNING id, enduro_id, name
            "#,
        )
        .bind(enduro_id)
        .bind(&req.name)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }

    /// Rename a category
    pub async fn update(&self, id: i64, req: &UpdateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = ?2
            WHERE id = ?1
            RETURNING id, enduro_id, name
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("category"))?;

        Ok(category)
    }

    /// Delete a category by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("category"));
        }

        Ok(())
    }
}
