use sqlx::SqlitePool;
use storage::{
    error::Result,
    models::{Checkpoint, Competitor, Enduro, TimeRecord},
    repository::{CheckpointRepository, CompetitorRepository, EnduroRepository, TimeRecordRepository},
    services::start_list,
};

/// Data for the timing entry page: the enduro, the checkpoint, and the
/// checkpoint's enduro's competitors
pub async fn entry_data(
    pool: &SqlitePool,
    enduro_id: i64,
    checkpoint_id: i64,
) -> Result<(Enduro, Checkpoint, Vec<Competitor>)> {
    let enduro = EnduroRepository::new(pool).find_by_id(enduro_id).await?;
    let checkpoint = CheckpointRepository::new(pool)
        .find_by_id(checkpoint_id)
        .await?;
    let competitors = CompetitorRepository::new(pool)
        .list_by_enduro(checkpoint.enduro_id)
        .await?;

    Ok((enduro, checkpoint, competitors))
}

/// Record a time for a competitor at a checkpoint. The start time written is
/// the enduro's base start time plus a flat minute; duplicates are allowed.
pub async fn record_time(
    pool: &SqlitePool,
    enduro_id: i64,
    checkpoint_id: i64,
    competitor_id: i64,
) -> Result<TimeRecord> {
    let enduro = EnduroRepository::new(pool).find_by_id(enduro_id).await?;
    let start_time = start_list::recorded_start_time(&enduro.start_time)?;

    TimeRecordRepository::new(pool)
        .create(enduro_id, checkpoint_id, competitor_id, &start_time)
        .await
}
