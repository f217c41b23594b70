use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::offline_server;

#[tokio::test]
async fn test_health_check() {
    let server = offline_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_version_reports_package() {
    let server = offline_server();

    let body = server.get("/version").await.json::<Value>();

    assert_eq!(body["name"], "registrar-api");
    assert!(body["version"].as_str().is_some_and(|v| !v.is_empty()));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = offline_server();

    server.get("/api/nowhere").await.assert_status(StatusCode::NOT_FOUND);
}
