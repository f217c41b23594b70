use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use pretty_assertions::assert_eq;
use registrar_api::middleware::error_handling::{map_error, AppError};
use registrar_core::errors::RegistrarError;
use rstest::rstest;
use serde_json::Value;
use uuid::Uuid;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[rstest]
#[case(RegistrarError::NotFound("Course".into()), StatusCode::NOT_FOUND)]
#[case(RegistrarError::Validation("name is required".into()), StatusCode::BAD_REQUEST)]
#[case(RegistrarError::InvalidInterval("start equals end".into()), StatusCode::BAD_REQUEST)]
#[case(
    RegistrarError::ScheduleConflict { conflicting_id: Uuid::nil() },
    StatusCode::BAD_REQUEST
)]
#[case(
    RegistrarError::DependentRecordsExist { entity: "course".into(), dependents: vec!["enrollments".into()] },
    StatusCode::BAD_REQUEST
)]
#[case(RegistrarError::Database(eyre::eyre!("connection reset")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(
    RegistrarError::Internal(Box::new(std::io::Error::other("disk full"))),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: RegistrarError, #[case] expected: StatusCode) {
    let kind = error.kind();
    let response = map_error(error);

    assert_eq!(response.status(), expected);
    assert_eq!(body_json(response).await["kind"], kind);
}

#[tokio::test]
async fn test_conflict_body_names_the_colliding_entry() {
    let conflicting_id = Uuid::new_v4();
    let response = AppError::from(RegistrarError::ScheduleConflict { conflicting_id }).into_response();

    let body = body_json(response).await;
    assert_eq!(body["kind"], "schedule_conflict");
    assert!(body["error"].as_str().unwrap().contains(&conflicting_id.to_string()));
}

#[tokio::test]
async fn test_dependent_records_body_lists_tables() {
    let response = map_error(RegistrarError::DependentRecordsExist {
        entity: "department".into(),
        dependents: vec!["faculty".into(), "students".into()],
    });

    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Cannot delete department: it is still referenced by faculty, students"
    );
}

#[test_log::test(tokio::test)]
async fn test_plain_storage_errors_stay_database_errors() {
    let error = AppError::from(eyre::eyre!("timeout waiting for connection"));
    assert_eq!(error.0.kind(), "database");
    assert_eq!(error.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
}
