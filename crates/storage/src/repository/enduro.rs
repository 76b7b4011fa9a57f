use sqlx::SqlitePool;

use crate::dto::enduro::{CreateEnduroRequest, UpdateEnduroRequest};
use crate::error::{Result, StorageError};
use crate::models::Enduro;

/// Repository for Enduro database operations
pub struct EnduroRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EnduroRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all enduros in creation order
    pub async fn list(&self) -> Result<Vec<Enduro>> {
        let enduros = sqlx::query_as::<_, Enduro>(
            r#"
            SELECT id, name, location, date, start_time
            FROM enduros
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(enduros)
    }

    /// Get an enduro by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Enduro> {
        let enduro = sqlx::query_as::<_, Enduro>(
            r#"
            SELECT id, name, location, date, start_time
            FROM enduros
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("enduro"))?;

        Ok(enduro)
    }

    /// Create a new enduro
    pub async fn create(&self, req: &CreateEnduroRequest) -> Result<Enduro> {
        let enduro = sqlx::query_as::<_, Enduro>(
            r#"
            INSERT INTO enduros (name, location, date, start_time)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, location, date, start_time
            "#,
        )
        .bind(&req.name)
        .bind(&req.location)
        .bind(&req.date)
        .bind(&req.start_time)
        .fetch_one(self.pool)
        .await?;

        Ok(enduro)
    }

    /// Update an existing enduro, replacing every field
    pub async fn update(&self, id: i64, req: &UpdateEnduroRequest) -> Result<Enduro> {
        let enduro = sqlx::query_as::<_, Enduro>(
            r#"
            UPDATE enduros
            SET name = ?2, location = ?3, date = ?4, start_time = ?5
            WHERE id = ?1
            RETURNING id, name, location, date, start_time
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.location)
        .bind(&req.date)
        .bind(&req.start_time)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("enduro"))?;

        Ok(enduro)
    }

    /// Delete an enduro by ID. Dependent rows are left in place; there is no
    /// cascade.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM enduros WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("enduro"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    fn create_request() -> CreateEnduroRequest {
        CreateEnduroRequest {
            name: "Trilha Norte".into(),
            location: "Serra".into(),
            date: "2026-05-01".into(),
            start_time: "08:00".into(),
        }
    }

    #[tokio::test]
    async fn created_enduro_is_retrievable_with_every_field() {
        let db = test_support::database().await;
        let repo = EnduroRepository::new(db.pool());

        let created = repo.create(&create_request()).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap();

        assert_eq!(found.name, "Trilha Norte");
        assert_eq!(found.location, "Serra");
        assert_eq!(found.date, "2026-05-01");
        assert_eq!(found.start_time, "08:00");
    }

    #[tokio::test]
    async fn deleted_enduro_is_not_found() {
        let db = test_support::database().await;
        let repo = EnduroRepository::new(db.pool());

        let created = repo.create(&create_request()).await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert!(matches!(
            repo.find_by_id(created.id).await,
            Err(StorageError::NotFound("enduro"))
        ));
    }

    #[tokio::test]
    async fn updating_missing_enduro_is_not_found() {
        let db = test_support::database().await;
        let repo = EnduroRepository::new(db.pool());

        let req = UpdateEnduroRequest {
            name: "X".into(),
            location: "Y".into(),
            date: "2026-01-01".into(),
            start_time: "09:30".into(),
        };

        assert!(matches!(
            repo.update(42, &req).await,
            Err(StorageError::NotFound("enduro"))
        ));
    }
}
