use sqlx::SqlitePool;
use storage::{
    dto::category::{CreateCategoryRequest, UpdateCategoryRequest},
    error::Result,
    models::{Category, Enduro},
    repository::{CategoryRepository, EnduroRepository},
};

/// Categories for the list page. Not filtered by enduro; see the repository.
pub async fn list_categories(pool: &SqlitePool, enduro_id: i64) -> Result<(Enduro, Vec<Category>)> {
    let enduro = EnduroRepository::new(pool).find_by_id(enduro_id).await?;
    let categories = CategoryRepository::new(pool).list_all().await?;

    Ok((enduro, categories))
}

/// Get an enduro for the create form
pub async fn get_enduro(pool: &SqlitePool, enduro_id: i64) -> Result<Enduro> {
    EnduroRepository::new(pool).find_by_id(enduro_id).await
}

/// Create a category for an existing enduro
pub async fn create_category(
    pool: &SqlitePool,
    enduro_id: i64,
    request: &CreateCategoryRequest,
) -> Result<Category> {
    EnduroRepository::new(pool).find_by_id(enduro_id).await?;

    CategoryRepository::new(pool).create(enduro_id, request).await
}

/// Data for the edit form, checking both the enduro and the category
pub async fn edit_form_data(
    pool: &SqlitePool,
    enduro_id: i64,
    category_id: i64,
) -> Result<(Enduro, Category)> {
    let enduro = EnduroRepository::new(pool).find_by_id(enduro_id).await?;
    let category = CategoryRepository::new(pool).find_by_id(category_id).await?;

    Ok((enduro, category))
}

/// Rename a category, checking both the enduro and the category
pub async fn update_category(
    pool: &SqlitePool,
    enduro_id: i64,
    category_id: i64,
    request: &UpdateCategoryRequest,
) -> Result<Category> {
    EnduroRepository::new(pool).find_by_id(enduro_id).await?;

    CategoryRepository::new(pool).update(category_id, request).await
}

/// Delete a category by id
pub async fn delete_category(pool: &SqlitePool, category_id: i64) -> Result<()> {
    CategoryRepository::new(pool).delete(category_id).await
}
