//! Router tests over a temporary SQLite database.

mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::ConnectionTrait;
use serde_json::Value;
use tower::ServiceExt;

use user_crud::api::{create_router, AppState};

const FORM: &str = "application/x-www-form-urlencoded";

async fn app() -> (Router, common::TestDb) {
    let db = common::setup().await;
    let state = AppState::from_database(Arc::new(db.database.clone()));
    (create_router(state), db)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

async fn json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _db) = app().await;

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_create_form_renders_view() {
    let (app, _db) = app().await;

    let response = app.oneshot(get("/user/create")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["view"], "create_user");
}

#[tokio::test]
async fn test_create_then_get_user() {
    let (app, _db) = app().await;

    let response = app
        .clone()
        .oneshot(post_form("/user/create", "id=1&email=a%40b.com&login=alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/user/get?id=1");

    let response = app.oneshot(get("/user/get?id=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["view"], "user_info");
    assert_eq!(body["model"]["id"], 1);
    assert_eq!(body["model"]["email"], "a@b.com");
    assert_eq!(body["model"]["login"], "alice");
}

#[tokio::test]
async fn test_invalid_create_redirects_back_to_form() {
    let (app, _db) = app().await;

    let response = app
        .clone()
        .oneshot(post_form("/user/create", "id=1&email=&login=alice"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/user/create");

    let response = app.oneshot(get("/user/get?id=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_create_is_conflict() {
    let (app, _db) = app().await;
    let body = "id=1&email=a%40b.com&login=alice";

    let first = app.clone().oneshot(post_form("/user/create", body)).await.unwrap();
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    let second = app
        .oneshot(post_form("/user/create", "id=1&email=c%40d.com&login=carol"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = json(second).await;
    assert_eq!(body["view"], "user_already_exists");
}

#[tokio::test]
async fn test_create_with_failing_database_renders_persistence_error() {
    let (app, db) = app().await;
    db.database
        .connection()
        .execute_unprepared("DROP TABLE users")
        .await
        .unwrap();

    let response = app
        .oneshot(post_form("/user/create", "id=1&email=a%40b.com&login=alice"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json(response).await;
    assert_eq!(body["view"], "persistence_error");
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let (app, _db) = app().await;

    let response = app.oneshot(get("/user/get?id=9999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json(response).await;
    assert_eq!(body["view"], "user_not_found");
}

#[tokio::test]
async fn test_get_without_id_is_bad_request() {
    let (app, _db) = app().await;

    let response = app.oneshot(get("/user/get")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json(response).await;
    assert_eq!(body["view"], "bad_request");
}

#[tokio::test]
async fn test_change_login_with_wrong_email_leaves_login() {
    let (app, _db) = app().await;
    app.clone()
        .oneshot(post_form("/user/create", "id=1&email=a%40b.com&login=alice"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_form(
            "/user/change-login",
            "id=1&email=wrong%40x.com&login=mallory",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/user/get?id=1");

    let body = json(app.oneshot(get("/user/get?id=1")).await.unwrap()).await;
    assert_eq!(body["model"]["login"], "alice");
}

#[tokio::test]
async fn test_change_login_with_matching_email() {
    let (app, _db) = app().await;
    app.clone()
        .oneshot(post_form("/user/create", "id=1&email=a%40b.com&login=alice"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_form(
            "/user/change-login",
            "id=1&email=a%40b.com&login=alicia",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let body = json(app.oneshot(get("/user/get?id=1")).await.unwrap()).await;
    assert_eq!(body["model"]["login"], "alicia");
}

#[tokio::test]
async fn test_change_login_form_prefills_from_query() {
    let (app, _db) = app().await;

    let response = app
        .oneshot(get("/user/change-login?id=1&email=a%40b.com&login=alice"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["view"], "change_user_login");
    assert_eq!(body["model"]["email"], "a@b.com");
}

#[tokio::test]
async fn test_delete_form_prefills_from_query() {
    let (app, _db) = app().await;

    let response = app.oneshot(get("/user/delete?id=3")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json(response).await;
    assert_eq!(body["view"], "delete_user");
    assert_eq!(body["model"]["id"], 3);
}

#[tokio::test]
async fn test_delete_without_id_redirects_to_form() {
    let (app, _db) = app().await;

    let response = app.oneshot(post_form("/user/delete", "")).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/user/delete");
}

#[tokio::test]
async fn test_delete_removes_user() {
    let (app, _db) = app().await;
    app.clone()
        .oneshot(post_form("/user/create", "id=3&email=c%40d.com&login=carol"))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_form("/user/delete", "id=3"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/user/delete");

    let response = app.oneshot(get("/user/get?id=3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
