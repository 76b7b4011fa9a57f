use axum::{Router, routing::get};
use storage::Database;

use super::handlers::start_list;

pub fn routes() -> Router<Database> {
    Router::new().route("/enduros/:enduro_id/listalargada/", get(start_list))
}
