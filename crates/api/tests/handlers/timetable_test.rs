use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::offline_server;

fn slot_body(day: &str, start: &str, end: &str, room: &str) -> Value {
    json!({
        "course_id": Uuid::new_v4(),
        "day": day,
        "start_time": start,
        "end_time": end,
        "room": room,
        "instructor_id": Uuid::new_v4(),
    })
}

#[rstest]
#[case::empty_interval("Monday", "09:00", "09:00")]
#[case::same_minute_different_seconds("Monday", "09:00:10", "09:00:50")]
#[case::unknown_day("Caturday", "09:00", "10:00")]
#[case::malformed_time("Monday", "9 o'clock", "10:00")]
#[case::missing_end("Monday", "09:00", "")]
#[tokio::test]
async fn test_create_rejects_bad_interval_before_storage(
    #[case] day: &str,
    #[case] start: &str,
    #[case] end: &str,
) {
    let server = offline_server();

    let response = server
        .post("/api/timetables")
        .json(&slot_body(day, start, end, "A-101"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "invalid_interval");
}

#[tokio::test]
async fn test_update_rejects_empty_interval_before_storage() {
    let server = offline_server();

    let response = server
        .put(&format!("/api/timetables/{}", Uuid::new_v4()))
        .json(&slot_body("Friday", "14:30", "14:30", "B-2"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "invalid_interval");
}

#[tokio::test]
async fn test_create_rejects_blank_room() {
    let server = offline_server();

    let response = server
        .post("/api/timetables")
        .json(&slot_body("Tuesday", "23:00", "01:00", "   "))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_create_rejects_body_missing_ids() {
    let server = offline_server();

    let response = server
        .post("/api/timetables")
        .json(&json!({ "day": "Monday", "start_time": "09:00", "end_time": "10:00", "room": "A" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_list_rejects_unknown_day_filter() {
    let server = offline_server();

    let response = server.get("/api/timetables").add_query_param("day", "Caturday").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[tokio::test]
async fn test_malformed_id_is_a_validation_error() {
    let server = offline_server();

    let response = server.get("/api/timetables/not-a-uuid").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "validation");
}

#[rstest]
#[case("sat")]
#[case("SATURDAY")]
#[case("")]
#[tokio::test]
async fn test_list_day_filter_accepts_body_spellings(#[case] day: &str) {
    let server = offline_server();

    let response = server.get("/api/timetables").add_query_param("day", day).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["kind"], "database");
}
