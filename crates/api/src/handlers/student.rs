use axum::{extract::State, http::StatusCode, Json};
use registrar_core::{
    errors::RegistrarError,
    models::student::{Attendance, AttendanceRequest, AttendanceView, Student, StudentRequest, StudentView},
};
use registrar_db::repositories::{dependents, student};
use std::sync::Arc;
use uuid::Uuid;

use super::{ensure_unreferenced, not_found};
use crate::{
    middleware::{
        error_handling::AppError,
        extract::{ApiJson, ApiPath},
    },
    ApiState,
};

pub async fn list_students(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<StudentView>>, AppError> {
    let students = student::list_students(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(students.into_iter().map(StudentView::from).collect()))
}

pub async fn get_student(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Student>, AppError> {
    let student = student::get_student_by_id(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Student", id))?;

    Ok(Json(student.into()))
}

pub async fn create_student(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<StudentRequest>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let request = payload.validated()?;

    let student = student::create_student(&state.db_pool, &request)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

pub async fn update_student(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<StudentRequest>,
) -> Result<Json<Student>, AppError> {
    let request = payload.validated()?;

    let student = student::update_student(&state.db_pool, id, &request)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Student", id))?;

    Ok(Json(student.into()))
}

pub async fn delete_student(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    ensure_unreferenced(&state.db_pool, "student", dependents::STUDENT_REFERENCES, id).await?;

    let deleted = student::delete_student(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Student", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

// Attendance

pub async fn list_attendance(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AttendanceView>>, AppError> {
    let records = student::list_attendance(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    let views = records
        .into_iter()
        .map(AttendanceView::try_from)
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(Json(views))
}

pub async fn get_attendance(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Attendance>, AppError> {
    let record = student::get_attendance_by_id(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Attendance record", id))?;

    Ok(Json(Attendance::try_from(record)?))
}

pub async fn create_attendance(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<AttendanceRequest>,
) -> Result<(StatusCode, Json<Attendance>), AppError> {
    let record = student::create_attendance(&state.db_pool, &payload)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(Attendance::try_from(record)?)))
}

pub async fn update_attendance(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<AttendanceRequest>,
) -> Result<Json<Attendance>, AppError> {
    let record = student::update_attendance(&state.db_pool, id, &payload)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Attendance record", id))?;

    Ok(Json(Attendance::try_from(record)?))
}

pub async fn delete_attendance(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = student::delete_attendance(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Attendance record", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
