use sqlx::SqlitePool;

use crate::dto::checkpoint::CreateCheckpointRequest;
use crate::error::{Result, StorageError};
use crate::models::Checkpoint;

/// Repository for Checkpoint database operations
pub struct CheckpointRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CheckpointRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List an enduro's checkpoints in creation order
    pub async fn list_by_enduro(&self, enduro_id: i64) -> Result<Vec<Checkpoint>> {
        let checkpoints = sqlx::query_as::<_, Checkpoint>(
            r#"
            SELECT id, enduro_id, name, reference_time
            FROM checkpoints
            WHERE enduro_id = ?1
            ORDER BY id
            "#,
        )
        .bind(enduro_id)
        .fetch_all(self.pool)
        .await?;

        Ok(checkpoints)
    }

    /// Get a checkpoint by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Checkpoint> {
        let checkpoint = sqlx::query_as::<_, Checkpoint>(
            r#"
            SELECT id, enduro_id, name, reference_time
            FROM checkpoints
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("checkpoint"))?;

        Ok(checkpoint)
    }

    /// Create a checkpoint and widen the timing table with a column named
    /// after it, in one transaction. The widening is runtime DDL: it cannot
    /// be rolled back once committed, and retrying after a partial failure
    /// fails on the duplicate column.
    pub async fn create(&self, enduro_id: i64, req: &CreateCheckpointRequest) -> Result<Checkpoint> {
        let mut tx = self.pool.begin().await?;

        let checkpoint = sqlx::query_as::<_, Checkpoint>(
            r#"
            INSERT INTO checkpoints (enduro_id, name, reference_time)
            VALUES (?1, ?2, ?3)
            RETURNING id, enduro_id, name, reference_time
            "#,
        )
        .bind(enduro_id)
        .bind(&req.name)
        .bind(req.reference_time)
        .fetch_one(&mut *tx)
        .await?;

        // DDL takes no bind parameters; the name is validated upstream and
        // quoted here.
        let column = req.name.replace('"', "\"\"");
        let ddl = format!(r#"ALTER TABLE time_records ADD COLUMN "{column}" TEXT DEFAULT ''"#);
        sqlx::query(&ddl).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(checkpoint)
    }
}
