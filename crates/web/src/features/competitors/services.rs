use sqlx::SqlitePool;
use storage::{
    dto::competitor::{CreateCompetitorRequest, UpdateCompetitorRequest},
    error::Result,
    models::{Category, Competitor, CompetitorWithCategory, Enduro},
    repository::{CategoryRepository, CompetitorRepository, EnduroRepository},
};

/// List an enduro's competitors with category names, checking the enduro
/// exists first
pub async fn list_competitors(
    pool: &SqlitePool,
    enduro_id: i64,
) -> Result<(Enduro, Vec<CompetitorWithCategory>)> {
    let enduro = EnduroRepository::new(pool).find_by_id(enduro_id).await?;
    let competitors = CompetitorRepository::new(pool)
        .list_by_enduro_with_category(enduro_id)
        .await?;

    Ok((enduro, competitors))
}

/// Data for the create form: the enduro plus the category choices
pub async fn create_form_data(pool: &SqlitePool, enduro_id: i64) -> Result<(Enduro, Vec<Category>)> {
    let enduro = EnduroRepository::new(pool).find_by_id(enduro_id).await?;
    let categories = CategoryRepository::new(pool).list_all().await?;

    Ok((enduro, categories))
}

/// Enter a competitor. The enduro and the chosen category must exist.
pub async fn create_competitor(
    pool: &SqlitePool,
    enduro_id: i64,
    request: &CreateCompetitorRequest,
) -> Result<Competitor> {
    EnduroRepository::new(pool).find_by_id(enduro_id).await?;
    CategoryRepository::new(pool)
        .find_by_id(request.category_id)
        .await?;

    CompetitorRepository::new(pool)
        .create(enduro_id, request)
        .await
}

/// Data for the edit form: the competitor plus the category choices
pub async fn edit_form_data(
    pool: &SqlitePool,
    competitor_id: i64,
) -> Result<(Competitor, Vec<Category>)> {
    let competitor = CompetitorRepository::new(pool)
        .find_by_id(competitor_id)
        .await?;
    let categories = CategoryRepository::new(pool).list_all().await?;

    Ok((competitor, categories))
}

/// Update a competitor by id
pub async fn update_competitor(
    pool: &SqlitePool,
    competitor_id: i64,
    request: &UpdateCompetitorRequest,
) -> Result<Competitor> {
    let repo = CompetitorRepository::new(pool);
    repo.update(competitor_id, request).await
}
