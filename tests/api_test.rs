//! Integration tests for API endpoints.
//!
//! Each test drives the full router over a fresh in-memory SQLite
//! database, so requests exercise handlers, services and the
//! repository together.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use user_registry::api::{create_router, AppState};
use user_registry::infra::db::test_support::memory_database;

async fn test_app() -> Router {
    let db = memory_database().await.unwrap();
    create_router(AppState::from_database(Arc::new(db)))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_returns_banner() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Welcome to User Registry");
}

#[tokio::test]
async fn health_reports_database_status() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn create_then_get_user() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "Alice", "age": 30}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["age"], 30);

    let response = app.oneshot(get_request("/users/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["name"], "Alice");
    assert_eq!(fetched["age"], 30);
}

#[tokio::test]
async fn create_rejects_blank_name() {
    let app = test_app().await;

    let response = app
        .oneshot(json_request("POST", "/users", json!({"name": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn get_missing_user_returns_404() {
    let app = test_app().await;

    let response = app.oneshot(get_request("/users/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn update_changes_provided_fields_only() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/users",
            json!({"name": "Alice", "age": 30}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/users/1", json!({"age": 31})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Alice");
    assert_eq!(updated["age"], 31);

    let response = app
        .oneshot(json_request("PUT", "/users/99", json!({"name": "Ghost"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_user_then_404() {
    let app = test_app().await;

    app.clone()
        .oneshot(json_request("POST", "/users", json!({"name": "Bob"})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/users/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_paginates_with_full_total() {
    let app = test_app().await;

    for i in 1..=5 {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/users",
                json!({"name": format!("User{}", i), "age": 20 + i}),
            ))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(get_request("/users?page=1&per_page=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["meta"]["total"], 5);
    assert_eq!(body["meta"]["total_pages"], 3);

    let response = app
        .oneshot(get_request("/users?page=3&per_page=2"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["total"], 5);
}

#[tokio::test]
async fn search_filters_by_age_range() {
    let app = test_app().await;

    for (name, age) in [("Young", 18), ("Mid", 25), ("Old", 30)] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/users",
                json!({"name": name, "age": age}),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(get_request("/users/search?min_age=20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Mid", "Old"]);
}
