use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use storage::{
    Database,
    dto::competitor::{CreateCompetitorRequest, UpdateCompetitorRequest},
};
use validator::Validate;

use crate::error::WebError;
use crate::flash;
use crate::views;

use super::services;

pub async fn list_competitors(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    let (enduro, competitors) = services::list_competitors(db.pool(), enduro_id).await?;

    let (notice, jar) = flash::take(jar);
    Ok((
        jar,
        Html(views::competitors::list(
            &enduro,
            &competitors,
            notice.as_ref(),
        )),
    )
        .into_response())
}

pub async fn create_competitor_form(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let (enduro, categories) = services::create_form_data(db.pool(), enduro_id).await?;

    Ok(Html(views::competitors::create_form(
        enduro.id,
        &categories,
    )))
}

pub async fn create_competitor(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
    jar: CookieJar,
    Form(req): Form<CreateCompetitorRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::create_competitor(db.pool(), enduro_id, &req).await?;

    let jar = flash::set(jar, "Competitor entered", "success");
    Ok((
        jar,
        Redirect::to(&format!("/enduros/{enduro_id}/competitors/")),
    )
        .into_response())
}

pub async fn edit_competitor_form(
    State(db): State<Database>,
    Path((_enduro_id, competitor_id)): Path<(i64, i64)>,
) -> Result<Html<String>, WebError> {
    let (competitor, categories) = services::edit_form_data(db.pool(), competitor_id).await?;

    Ok(Html(views::competitors::edit_form(
        competitor.enduro_id,
        &competitor,
        &categories,
    )))
}

pub async fn update_competitor(
    State(db): State<Database>,
    Path((enduro_id, competitor_id)): Path<(i64, i64)>,
    jar: CookieJar,
    Form(req): Form<UpdateCompetitorRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_competitor(db.pool(), competitor_id, &req).await?;

    let jar = flash::set(jar, "Competitor updated", "success");
    Ok((
        jar,
        Redirect::to(&format!("/enduros/{enduro_id}/competitors/")),
    )
        .into_response())
}
