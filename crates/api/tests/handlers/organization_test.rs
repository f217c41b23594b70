use axum::http::StatusCode;
use fake::{faker::internet::en::SafeEmail, faker::name::en::LastName, Fake};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::offline_server;

#[tokio::test]
async fn test_create_department_requires_a_name() {
    let server = offline_server();

    let response = server
        .post("/api/departments")
        .json(&json!({ "name": "  \t " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["kind"], "validation");
    assert_eq!(body["error"], "Validation error: name is required");
}

#[tokio::test]
async fn test_update_department_requires_a_name() {
    let server = offline_server();

    let response = server
        .put(&format!("/api/departments/{}", Uuid::new_v4()))
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_faculty_rejects_malformed_email() {
    let server = offline_server();
    let last_name: String = LastName().fake();

    let response = server
        .post("/api/faculty")
        .json(&json!({
            "first_name": "Grace",
            "last_name": last_name,
            "email": "not-an-address",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_create_student_requires_enrollment_number() {
    let server = offline_server();
    let email: String = SafeEmail().fake();

    let response = server
        .post("/api/students")
        .json(&json!({
            "first_name": "Alan",
            "last_name": "Turing",
            "enrollment_no": " ",
            "email": email,
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}
