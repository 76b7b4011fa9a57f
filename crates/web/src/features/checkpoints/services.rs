use sqlx::SqlitePool;
use storage::{
    dto::checkpoint::CreateCheckpointRequest,
    error::Result,
    models::{Checkpoint, Enduro},
    repository::{CheckpointRepository, EnduroRepository},
};

/// List an enduro's checkpoints, checking the enduro exists first
pub async fn list_checkpoints(
    pool: &SqlitePool,
    enduro_id: i64,
) -> Result<(Enduro, Vec<Checkpoint>)> {
    let enduro = EnduroRepository::new(pool).find_by_id(enduro_id).await?;
    let checkpoints = CheckpointRepository::new(pool)
        .list_by_enduro(enduro_id)
        .await?;

    Ok((enduro, checkpoints))
}

/// Get an enduro for the create form
pub async fn get_enduro(pool: &SqlitePool, enduro_id: i64) -> Result<Enduro> {
    EnduroRepository::new(pool).find_by_id(enduro_id).await
}

/// Create a checkpoint for an existing enduro; the repository also widens
/// the timing table
pub async fn create_checkpoint(
    pool: &SqlitePool,
    enduro_id: i64,
    request: &CreateCheckpointRequest,
) -> Result<Checkpoint> {
    EnduroRepository::new(pool).find_by_id(enduro_id).await?;

    CheckpointRepository::new(pool)
        .create(enduro_id, request)
        .await
}
