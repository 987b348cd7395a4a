//! Request helpers shared by the handler tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};

pub(super) async fn test_app() -> axum::Router {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");

    routes::create_router(AppState::new(db))
}

pub(super) async fn json_body(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub(super) async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Register a user and return its id.
pub(super) async fn create_user(app: &axum::Router, email: &str) -> String {
    let response = send(
        app,
        "POST",
        "/api/v1/users",
        Some(json!({"email": email, "password": "s3cret-pass"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await["id"].as_str().unwrap().to_string()
}

/// Create a task and return the response body.
pub(super) async fn create_task(app: &axum::Router, user_id: &str, body: Value) -> Value {
    let mut body = body;
    body["user_id"] = json!(user_id);
    let response = send(app, "POST", "/api/v1/tasks", Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}
