use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_competitor, create_competitor_form, edit_competitor_form, list_competitors,
    update_competitor,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/enduros/:enduro_id/competitors/",
            get(list_competitors).post(create_competitor),
        )
        .route(
            "/enduros/:enduro_id/competitors/create",
            get(create_competitor_form),
        )
        .route(
            "/enduros/:enduro_id/competitors/:competitor_id/edit/",
            get(edit_competitor_form),
        )
        .route(
            "/enduros/:enduro_id/competitors/:competitor_id/update/",
            post(update_competitor),
        )
}
