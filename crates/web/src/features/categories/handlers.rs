use axum::{
    Form,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use storage::{
    Database,
    dto::category::{CreateCategoryRequest, UpdateCategoryRequest},
};
use validator::Validate;

use crate::error::WebError;
use crate::flash;
use crate::views;

use super::services;

pub async fn list_categories(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    let (enduro, categories) = services::list_categories(db.pool(), enduro_id).await?;

    let (notice, jar) = flash::take(jar);
    Ok((
        jar,
        Html(views::categories::list(
            enduro.id,
            &categories,
            notice.as_ref(),
        )),
    )
        .into_response())
}

pub async fn create_category_form(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let enduro = services::get_enduro(db.pool(), enduro_id).await?;

    Ok(Html(views::categories::create_form(&enduro)))
}

pub async fn create_category(
    State(db): State<Database>,
    Path(enduro_id): Path<i64>,
    jar: CookieJar,
    Form(req): Form<CreateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::create_category(db.pool(), enduro_id, &req).await?;

    let jar = flash::set(jar, "Category created", "success");
    Ok((
        jar,
        Redirect::to(&format!("/enduros/{enduro_id}/categories/")),
    )
        .into_response())
}

pub async fn edit_category_form(
    State(db): State<Database>,
    Path((enduro_id, category_id)): Path<(i64, i64)>,
) -> Result<Html<String>, WebError> {
    let (enduro, category) = services::edit_form_data(db.pool(), enduro_id, category_id).await?;

    Ok(Html(views::categories::edit_form(enduro.id, &category)))
}

pub async fn update_category(
    State(db): State<Database>,
    Path((enduro_id, category_id)): Path<(i64, i64)>,
    jar: CookieJar,
    Form(req): Form<UpdateCategoryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_category(db.pool(), enduro_id, category_id, &req).await?;

    let jar = flash::set(jar, "Category updated", "success");
    Ok((
        jar,
        Redirect::to(&format!("/enduros/{enduro_id}/categories/")),
    )
        .into_response())
}

pub async fn delete_category(
    State(db): State<Database>,
    Path((enduro_id, category_id)): Path<(i64, i64)>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    services::delete_category(db.pool(), category_id).await?;

    let jar = flash::set(jar, "Category deleted", "success");
    Ok((
        jar,
        Redirect::to(&format!("/enduros/{enduro_id}/categories/")),
    )
        .into_response())
}
