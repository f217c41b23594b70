use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::offline_server;

#[tokio::test]
async fn test_enrolled_teachers_listing_is_routed() {
    let server = offline_server();

    let response = server.get("/api/enrolled-teachers").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["kind"], "database");
}

#[tokio::test]
async fn test_enrolled_teacher_requires_a_course() {
    let server = offline_server();

    let response = server
        .post("/api/enrolled-teachers")
        .json(&json!({ "faculty_id": Uuid::new_v4() }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_enrolled_teacher_delete_rejects_malformed_id() {
    let server = offline_server();

    let response = server.delete("/api/enrolled-teachers/not-a-uuid").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}
