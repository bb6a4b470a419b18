#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use serde::de::DeserializeOwned;
use student_service::app::create_app;
use student_service::bootstrap::seed_students;
use student_service::state::AppState;
use student_service::student::PageSettings;
use tower::ServiceExt;

pub async fn test_app() -> Router {
    test_app_with(PageSettings::default()).await
}

pub async fn test_app_with(paging: PageSettings) -> Router {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");
    seed_students(&db).await.expect("seed");

    create_app(AppState::new(db, paging), false)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, body.to_vec())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let (status, body) = get(app, uri).await;
    (status, String::from_utf8(body).expect("utf-8 body"))
}

pub async fn get_json<T: DeserializeOwned>(app: &Router, uri: &str) -> T {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "{}", String::from_utf8_lossy(&body));
    serde_json::from_slice(&body).expect("json body")
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> (StatusCode, Vec<u8>) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
