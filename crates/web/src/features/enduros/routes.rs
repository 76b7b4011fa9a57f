use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    create_enduro, create_enduro_form, delete_enduro, edit_enduro_form, enduro_detail, index,
    list_enduros, update_enduro,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(index))
        .route("/enduros/", get(list_enduros).post(create_enduro))
        .route("/enduros/create/", get(create_enduro_form))
        .route("/enduros/:enduro_id/", get(enduro_detail))
        .route("/enduros/:enduro_id/edit/", get(edit_enduro_form))
        .route("/enduros/:enduro_id/update/", post(update_enduro))
        .route("/enduros/:enduro_id/delete/", post(delete_enduro))
}
