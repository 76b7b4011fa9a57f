pub mod config;
pub mod error;
pub mod features;
pub mod flash;
pub mod views;

use axum::Router;
use storage::Database;
use tower_http::trace::TraceLayer;

/// Builds the full application router.
pub fn app(db: Database) -> Router {
    Router::new()
        .merge(features::enduros::routes::routes())
        .merge(features::competitors::routes::routes())
        .merge(features::checkpoints::routes::routes())
        .merge(features::timing::routes::routes())
        .merge(features::start_list::routes::routes())
        .merge(features::categories::routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}
