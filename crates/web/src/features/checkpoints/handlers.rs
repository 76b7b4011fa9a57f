use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use storage::{Database, dto::checkpoint::CreateCheckpointRequest};
use validator::Validate;

use crate::error::WebError;
use crate::flash;
use crate::views;

use super::services;

pub async fn list_checkpoints(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    let (enduro, checkpoints) = services::list_checkpoints(db.pool(), enduro_id).await?;

    let (notice, jar) = flash::take(jar);
    Ok((
        jar,
        Html(views::checkpoints::list(
            &enduro,
            &checkpoints,
            notice.as_ref(),
        )),
    )
        .into_response())
}

pub async fn create_checkpoint_form(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let enduro = services::get_enduro(db.pool(), enduro_id).await?;

    Ok(Html(views::checkpoints::create_form(&enduro)))
}

pub async fn create_checkpoint(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
    jar: CookieJar,
    Form(req): Form<CreateCheckpointRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::create_checkpoint(db.pool(), enduro_id, &req).await?;

    let jar = flash::set(jar, "Checkpoint added", "success");
    Ok((jar, Redirect::to(&format!("/enduros/{enduro_id}/"))).into_response())
}
