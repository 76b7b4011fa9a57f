use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use storage::Database;
use tower::ServiceExt;
use web::app;

async fn test_app() -> (Router, Database) {
    let db = Database::new("sqlite::memory:").await.unwrap();
    db.run_migrations().await.unwrap();
    (app(db.clone()), db)
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Creates an enduro starting at 08:00 and returns its detail URL.
async fn seed_enduro(app: &Router) -> String {
    let response = send(
        app,
        form_post(
            "/enduros/",
            "name=Trilha+Norte&location=Serra&date=2026-05-01&start_time=08%3A00",
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

async fn seed_category(app: &Router) {
    let response = send(app, form_post("/enduros/1/category/create", "name=Pro")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

async fn seed_competitor(app: &Router, name: &str, plate: &str) {
    let response = send(
        app,
        form_post(
            "/enduros/1/competitors/",
            &format!("name={name}&plate={plate}&category_id=1"),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn landing_page_renders() {
    let (app, _db) = test_app().await;

    let response = send(&app, get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/enduros/"));
}

#[tokio::test]
async fn created_enduro_is_retrievable_with_every_field() {
    let (app, _db) = test_app().await;

    let detail_url = seed_enduro(&app).await;
    assert_eq!(detail_url, "/enduros/1/");

    let response = send(&app, get(&detail_url)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Trilha Norte"));
    assert!(body.contains("Serra"));
    assert!(body.contains("2026-05-01"));
    assert!(body.contains("08:00"));
}

#[tokio::test]
async fn missing_enduro_detail_is_not_found() {
    let (app, _db) = test_app().await;

    let response = send(&app, get("/enduros/99/")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("enduro not found"));
}

#[tokio::test]
async fn deleted_enduro_detail_is_not_found() {
    let (app, _db) = test_app().await;
    seed_enduro(&app).await;

    let response = send(&app, form_post("/enduros/1/delete/", "")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = send(&app, get("/enduros/1/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_enduro_form_is_rejected() {
    let (app, _db) = test_app().await;

    let response = send(
        &app,
        form_post(
            "/enduros/",
            "name=&location=Serra&date=2026-05-01&start_time=08%3A00",
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Validation failed"));
}

#[tokio::test]
async fn updating_missing_competitor_is_not_found_and_writes_nothing() {
    let (app, db) = test_app().await;
    seed_enduro(&app).await;

    let response = send(
        &app,
        form_post(
            "/enduros/1/competitors/7/update/",
            "name=Ana&plate=001&category_id=1",
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let competitors = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM competitors")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(competitors, 0);
}

#[tokio::test]
async fn updating_missing_category_is_not_found() {
    let (app, _db) = test_app().await;
    seed_enduro(&app).await;

    let response = send(&app, form_post("/enduros/1/categories/9/update/", "name=Pro")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn competitor_with_missing_category_is_rejected() {
    let (app, _db) = test_app().await;
    seed_enduro(&app).await;

    let response = send(
        &app,
        form_post("/enduros/1/competitors/", "name=Ana&plate=001&category_id=5"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn competitor_list_shows_category_names() {
    let (app, _db) = test_app().await;
    seed_enduro(&app).await;
    seed_category(&app).await;
    seed_competitor(&app, "Ana", "001").await;

    let response = send(&app, get("/enduros/1/competitors/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Ana"));
    assert!(body.contains("Pro"));
}

#[tokio::test]
async fn start_list_staggers_one_minute_per_competitor() {
    let (app, _db) = test_app().await;
    seed_enduro(&app).await;
    seed_category(&app).await;
    seed_competitor(&app, "Ana", "001").await;
    seed_competitor(&app, "Bruno", "002").await;
    seed_competitor(&app, "Carla", "003").await;

    let response = send(&app, get("/enduros/1/listalargada/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    let first = body.find("08:00").unwrap();
    let second = body.find("08:01").unwrap();
    let third = body.find("08:02").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn checkpoint_list_formats_reference_time_as_hms() {
    let (app, _db) = test_app().await;
    seed_enduro(&app).await;

    let response = send(
        &app,
        form_post("/enduros/1/checkpoints/", "name=CP1&reference_time=125"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = send(&app, get("/enduros/1/checkpoints/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("CP1"));
    assert!(body.contains("00:02:05"));
}

#[tokio::test]
async fn duplicate_checkpoint_name_fails_with_server_error() {
    let (app, _db) = test_app().await;
    seed_enduro(&app).await;

    let first = send(
        &app,
        form_post("/enduros/1/checkpoints/", "name=CP1&reference_time=125"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    let second = send(
        &app,
        form_post("/enduros/1/checkpoints/", "name=CP1&reference_time=90"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn duplicate_timing_entries_both_persist() {
    let (app, db) = test_app().await;
    seed_enduro(&app).await;
    seed_category(&app).await;
    seed_competitor(&app, "Ana", "001").await;

    let response = send(
        &app,
        form_post("/enduros/1/checkpoints/", "name=CP1&reference_time=60"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    for _ in 0..2 {
        let response = send(
            &app,
            form_post("/enduros/1/checkpoints/1/competitors/1/update/", ""),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let times: Vec<String> = sqlx::query_scalar("SELECT start_time FROM time_records")
        .fetch_all(db.pool())
        .await
        .unwrap();

    // Both submissions land, each with the flat base-plus-one-minute time.
    assert_eq!(times, ["08:01", "08:01"]);
}

#[tokio::test]
async fn mutation_sets_a_flash_cookie_and_next_view_clears_it() {
    let (app, _db) = test_app().await;

    let response = send(
        &app,
        form_post(
            "/enduros/",
            "name=Trilha&location=Serra&date=2026-05-01&start_time=08%3A00",
        ),
    )
    .await;

    let cookies: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("flash_message=")));

    let request = Request::builder()
        .uri("/enduros/1/")
        .header(header::COOKIE, "flash_message=Enduro%20created; flash_category=success")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The page shows the notice and expires the cookies.
    let clears: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(clears.iter().any(|c| c.starts_with("flash_message=")));

    let body = body_text(response).await;
    assert!(body.contains("Enduro"));
}

#[tokio::test]
async fn category_rename_round_trips() {
    let (app, _db) = test_app().await;
    seed_enduro(&app).await;
    seed_category(&app).await;

    let response = send(
        &app,
        form_post("/enduros/1/categories/1/update/", "name=Elite"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = send(&app, get("/enduros/1/categories/")).await;
    let body = body_text(response).await;
    assert!(body.contains("Elite"));
    assert!(!body.contains(">Pro<"));
}
