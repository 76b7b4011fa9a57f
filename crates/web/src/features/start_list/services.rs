use sqlx::SqlitePool;
use storage::{
    error::Result,
    models::Enduro,
    repository::{CategoryRepository, CompetitorRepository, EnduroRepository},
    services::start_list::{self, StartListEntry},
};

/// Compute the start order for an enduro: one minute per competitor from the
/// base start time, in entry order
pub async fn start_list(pool: &SqlitePool, enduro_id: i64) -> Result<(Enduro, Vec<StartListEntry>)> {
    let enduro = EnduroRepository::new(pool).find_by_id(enduro_id).await?;
    let competitors = CompetitorRepository::new(pool)
        .list_by_enduro(enduro_id)
        .await?;
    let categories = CategoryRepository::new(pool).list_all().await?;

    let entries = start_list::build_start_list(&enduro.start_time, &competitors, &categories)?;

    Ok((enduro, entries))
}
