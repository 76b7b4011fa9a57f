use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use storage::{
    Database,
    dto::enduro::{CreateEnduroRequest, UpdateEnduroRequest},
};
use validator::Validate;

use crate::error::WebError;
use crate::flash;
use crate::views;

use super::services;

pub async fn index(jar: CookieJar) -> Response {
    let (notice, jar) = flash::take(jar);
    (jar, Html(views::index_page(notice.as_ref()))).into_response()
}

pub async fn list_enduros(
    State(db): State<Database>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    let enduros = services::list_enduros(db.pool()).await?;

    let (notice, jar) = flash::take(jar);
    Ok((jar, Html(views::enduros::list(&enduros, notice.as_ref()))).into_response())
}

pub async fn create_enduro_form() -> Html<String> {
    Html(views::enduros::create_form())
}

pub async fn create_enduro(
    State(db): State<Database>,
    jar: CookieJar,
    Form(req): Form<CreateEnduroRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let enduro = services::create_enduro(db.pool(), &req).await?;

    let jar = flash::set(jar, "Enduro created", "success");
    Ok((jar, Redirect::to(&format!("/enduros/{}/", enduro.id))).into_response())
}

pub async fn enduro_detail(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    let enduro = services::get_enduro(db.pool(), enduro_id).await?;

    let (notice, jar) = flash::take(jar);
    Ok((jar, Html(views::enduros::detail(&enduro, notice.as_ref()))).into_response())
}

pub async fn edit_enduro_form(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let enduro = services::get_enduro(db.pool(), enduro_id).await?;

    Ok(Html(views::enduros::edit_form(&enduro)))
}

pub async fn update_enduro(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
    jar: CookieJar,
    Form(req): Form<UpdateEnduroRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_enduro(db.pool(), enduro_id, &req).await?;

    let jar = flash::set(jar, "Enduro updated", "success");
    Ok((jar, Redirect::to("/enduros/")).into_response())
}

pub async fn delete_enduro(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    services::delete_enduro(db.pool(), enduro_id).await?;

    let jar = flash::set(jar, "Enduro deleted", "success");
    Ok((jar, Redirect::to("/enduros/")).into_response())
}
