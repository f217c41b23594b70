use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::offline_server;

#[tokio::test]
async fn test_session_years_must_be_ordered() {
    let server = offline_server();

    let response = server
        .post("/api/sessions")
        .json(&json!({ "start_year": 2025, "end_year": 2024 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_current_semester_dates_must_be_ordered() {
    let server = offline_server();

    let response = server
        .post("/api/current-semesters")
        .json(&json!({
            "program_id": Uuid::new_v4(),
            "semester_id": Uuid::new_v4(),
            "start_date": "2025-06-30",
            "end_date": "2025-01-15",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_program_requires_a_name() {
    let server = offline_server();

    let response = server
        .post("/api/programs")
        .json(&json!({ "name": "", "session_id": Uuid::new_v4() }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_assignment_filter_rejects_malformed_ids() {
    let server = offline_server();

    let response = server
        .get("/api/course-assignments")
        .add_query_param("program_id", "42")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_blank_assignment_filters_are_ignored() {
    let server = offline_server();

    let response = server
        .get("/api/course-assignments")
        .add_query_param("program_id", "")
        .add_query_param("session_id", "")
        .add_query_param("current_semester_id", "")
        .await;

    // Past validation, so the listing reaches the offline pool.
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["kind"], "database");
}
