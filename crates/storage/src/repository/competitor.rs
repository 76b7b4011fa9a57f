use sqlx::SqlitePool;

use crate::dto::competitor::{CreateCompetitorRequest, UpdateCompetitorRequest};
use crate::error::{Result, StorageError};
use crate::models::{Competitor, CompetitorWithCategory};

/// Repository for Competitor database operations
pub struct CompetitorRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CompetitorRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List an enduro's competitors in entry order
    pub async fn list_by_enduro(&self, enduro_id: i64) -> Result<Vec<Competitor>> {
        let competitors = sqlx::query_as::<_, Competitor>(
            r#"
            SELECT id, enduro_id, name, plate, category_id
            FROM competitors
            WHERE enduro_id = ?1
            ORDER BY id
            "#,
        )
        .bind(enduro_id)
        .fetch_all(self.pool)
        .await?;

        Ok(competitors)
    }

    /// List an enduro's competitors with category names for display
    pub async fn list_by_enduro_with_category(
        &self,
        enduro_id: i64,
    ) -> Result<Vec<CompetitorWithCategory>> {
        let competitors = sqlx::query_as::<_, CompetitorWithCategory>(
            r#"
            SELECT c.id, c.enduro_id, c.name, c.plate, c.category_id,
                   cat.name AS category_name
            FROM competitors c
            LEFT JOIN categories cat ON cat.id = c.category_id
            WHERE c.enduro_id = ?1
            ORDER BY c.id
            "#,
        )
        .bind(enduro_id)
        .fetch_all(self.pool)
        .await?;

        Ok(competitors)
    }

    /// Get a competitor by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Competitor> {
        let competitor = sqlx::query_as::<_, Competitor>(
            r#"
            SELECT id, enduro_id, name, plate, category_id
            FROM competitors
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("competitor"))?;

        Ok(competitor)
    }

    /// Enter a competitor into an enduro
    pub async fn create(
        &self,
        enduro_id: i64,
        req: &CreateCompetitorRequest,
    ) -> Result<Competitor> {
        let competitor = sqlx::query_as::<_, Competitor>(
            r#"
            INSERT INTO competitors (enduro_id, name, plate, category_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, enduro_id, name, plate, category_id
            "#,
        )
        .bind(enduro_id)
        .bind(&req.name)
        .bind(&req.plate)
        .bind(req.category_id)
        .fetch_one(self.pool)
        .await?;

        Ok(competitor)
    }

    /// Update a competitor's name, plate and category
    pub async fn update(&self, id: i64, req: &UpdateCompetitorRequest) -> Result<Competitor> {
        let competitor = sqlx::query_as::<_, Competitor>(
            r#"
            UPDATE competitors
            SET name = ?2, plate = ?3, category_id = ?4
            WHERE id = ?1
            RETURNING id, enduro_id, name, plate, category_id
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.plate)
        .bind(req.category_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("competitor"))?;

        Ok(competitor)
    }
}
