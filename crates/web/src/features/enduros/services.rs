use sqlx::SqlitePool;
use storage::{
    dto::enduro::{CreateEnduroRequest, UpdateEnduroRequest},
    error::Result,
    models::Enduro,
    repository::EnduroRepository,
};

/// List all enduros
pub async fn list_enduros(pool: &SqlitePool) -> Result<Vec<Enduro>> {
    let repo = EnduroRepository::new(pool);
    repo.list().await
}

/// Get an enduro by id
pub async fn get_enduro(pool: &SqlitePool, id: i64) -> Result<Enduro> {
    let repo = EnduroRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new enduro
pub async fn create_enduro(pool: &SqlitePool, request: &CreateEnduroRequest) -> Result<Enduro> {
    let repo = EnduroRepository::new(pool);
    repo.create(request).await
}

/// Update an enduro
pub async fn update_enduro(
    pool: &SqlitePool,
    id: i64,
    request: &UpdateEnduroRequest,
) -> Result<Enduro> {
    let repo = EnduroRepository::new(pool);
    repo.update(id, request).await
}

/// Delete an enduro. Dependent rows stay behind; see the repository.
pub async fn delete_enduro(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = EnduroRepository::new(pool);
    repo.delete(id).await
}
