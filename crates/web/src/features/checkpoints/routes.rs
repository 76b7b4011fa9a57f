use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_checkpoint, create_checkpoint_form, list_checkpoints};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/enduros/:enduro_id/checkpoints/",
            get(list_checkpoints).post(create_checkpoint),
        )
        .route(
            "/enduros/:enduro_id/checkpoints/create/",
            get(create_checkpoint_form),
        )
}
