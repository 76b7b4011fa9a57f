use axum::{
    extract::{Path, State},
    response::Html,
};
use storage::Database;

use crate::error::WebError;
use crate::views;

use super::services;

pub async fn start_list(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let (enduro, entries) = services::start_list(db.pool(), enduro_id).await?;

    Ok(Html(views::start_list::list(&enduro, &entries)))
}
