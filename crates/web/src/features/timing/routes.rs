use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{record_time, timing_entry};

pub fn routes() -> Router<Database> {
    Router::new()
        .route(
            "/enduros/:enduro_id/checkpoints/:checkpoint_id/competitors/",
            get(timing_entry),
        )
        .route(
            "/enduros/:enduro_id/checkpoints/:checkpoint_id/competitors/:competitor_id/update/",
            post(record_time),
        )
}
