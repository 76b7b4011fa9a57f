use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_category, create_category_form, delete_category, edit_category_form, list_categories,
    update_category,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/enduros/:enduro_id/category/create",
            get(create_category_form).post(create_category),
        )
        .route("/enduros/:enduro_id/categories/", get(list_categories))
        .route(
            "/enduros/:enduro_id/categories/:category_id/edit/",
            get(edit_category_form),
        )
        .route(
            "/enduros/:enduro_id/categories/:category_id/update/",
            post(update_category),
        )
        .route(
            "/enduros/:enduro_id/categories/:category_id/delete/",
            post(delete_category),
        )
}
