use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use storage::Database;

use crate::error::WebError;
use crate::flash;
use crate::views;

use super::services;

pub async fn timing_entry(
    State(db): State<Database>,
    Path((enduro_id, checkpoint_id)): Path<(i64, i64)>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    let (enduro, checkpoint, competitors) =
        services::entry_data(db.pool(), enduro_id, checkpoint_id).await?;

    let (notice, jar) = flash::take(jar);
    Ok((
        jar,
        Html(views::timing::entry(
            &enduro,
            &checkpoint,
            &competitors,
            notice.as_ref(),
        )),
    )
        .into_response())
}

pub async fn record_time(
    State(db): State<Database>,
    Path((enduro_id, checkpoint_id, competitor_id)): Path<(i64, i64, i64)>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    services::record_time(db.pool(), enduro_id, checkpoint_id, competitor_id).await?;

    let jar = flash::set(jar, "Time recorded", "success");
    Ok((
        jar,
        Redirect::to(&format!(
            "/enduros/{enduro_id}/checkpoints/{checkpoint_id}/competitors/"
        )),
    )
        .into_response())
}
