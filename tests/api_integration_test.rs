use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use formant::api::ApiState;
use formant::catalog::SchemaCatalog;
use serde_json::Value;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::RwLock;
use tower::util::ServiceExt;

fn fixture_app() -> axum::Router {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(
        root.join("strings.json"),
        r#"{ "type": "object", "title": "Strings", "properties": { "name": { "type": "string" } } }"#,
    )
    .unwrap();
    fs::write(
        root.join("numbers.json"),
        r#"{ "type": "object", "properties": { "port": { "type": "integer" } } }"#,
    )
    .unwrap();

    let catalog = SchemaCatalog::load(root).unwrap();
    formant::create_app(ApiState {
        catalog: Arc::new(RwLock::new(catalog)),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_schemas() {
    let app = fixture_app();

    let request = Request::builder()
        .uri("/api/schemas")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], Value::Bool(true));

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    // Catalog entries are sorted by name.
    assert_eq!(data[0]["name"], "numbers");
    assert_eq!(data[1]["name"], "strings");
    assert_eq!(data[1]["title"], "Strings");
}

#[tokio::test]
async fn test_get_schema_by_name() {
    let app = fixture_app();

    let request = Request::builder()
        .uri("/api/schemas/strings")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["data"]["title"], "Strings");
    assert!(body["data"]["properties"]["name"].is_object());
}

#[tokio::test]
async fn test_get_unknown_schema_is_not_found() {
    let app = fixture_app();

    let request = Request::builder()
        .uri("/api/schemas/missing")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["success"], Value::Bool(false));
    assert!(body["error"].as_str().unwrap().contains("missing"));
}

#[tokio::test]
async fn test_health() {
    let app = fixture_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_ui() {
    let app = fixture_app();

    let request = Request::builder()
        .uri("/some/client/route")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));
}
