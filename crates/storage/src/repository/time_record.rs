use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::TimeRecord;

/// Repository for TimeRecord database operations
pub struct TimeRecordRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TimeRecordRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a time for a competitor at a checkpoint. There is no
    /// uniqueness constraint: a resubmission inserts a second row.
    pub async fn create(
        &self,
        enduro_id: i64,
        checkpoint_id: i64,
        competitor_id: i64,
        start_time: &str,
    ) -> Result<TimeRecord> {
        let record = sqlx::query_as::<_, TimeRecord>(
            r#"
            INSERT INTO time_records (enduro_id, checkpoint_id, competitor_id, start_time)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, enduro_id, checkpoint_id, competitor_id, start_time
            "#,
        )
        .bind(enduro_id)
        .bind(checkpoint_id)
        .bind(competitor_id)
        .bind(start_time)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    #[cfg(test)]
    async fn count(&self) -> Result<i64> {
        Ok(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM time_records")
                .fetch_one(self.pool)
                .await?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[tokio::test]
    async fn duplicate_entries_for_same_competitor_both_persist() {
        let db = test_support::database().await;
        let repo = TimeRecordRepository::new(db.pool());

        repo.create(1, 1, 1, "08:01").await.unwrap();
        repo.create(1, 1, 1, "08:01").await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
