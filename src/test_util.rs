//! Shared helpers for router-level tests: a fresh on-disk SQLite database
//! per test, plus oneshot request plumbing.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::{app, AppState};

pub(crate) struct TestContext {
    pub db: SqlitePool,
    // Dropping this deletes the database directory.
    _dir: TempDir,
}

pub(crate) async fn test_app() -> (Router, TestContext) {
    let dir = tempfile::tempdir().expect("tempdir");
    let database_url = format!(
        "sqlite://{}",
        dir.path().join("mindmate-test.db").display()
    );

    let db = crate::db::pool::create_pool(&database_url).await;
    crate::db::schema::init_schema(&db).await.expect("schema init");

    let router = app(AppState { db: db.clone() });
    (router, TestContext { db, _dir: dir })
}

pub(crate) async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// POST with no body and no content type.
pub(crate) async fn post_empty(app: &Router, path: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub(crate) async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(path).body(Body::empty()).unwrap();
    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.expect("request failed");
    let status = res.status();
    let bytes = res.into_body().collect().await.expect("body").to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response was not JSON")
    };
    (status, value)
}
