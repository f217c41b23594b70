use axum::{extract::State, http::StatusCode, Json};
use registrar_core::{
    errors::RegistrarError,
    models::organization::{Department, DepartmentRequest, Faculty, FacultyRequest, FacultyView},
};
use registrar_db::repositories::{dependents, organization};
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

pub async fn list_departments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Department>>, AppError> {
    let departments = organization::list_departments(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(departments.into_iter().map(Department::from).collect()))
}

pub async fn get_department(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Department>, AppError> {
    let department = organization::get_department_by_id(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Department", id))?;

    Ok(Json(department.into()))
}

pub async fn create_department(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<DepartmentRequest>,
) -> Result<(StatusCode, Json<Department>), AppError> {
    let request = payload.validated()?;

    let department = organization::create_department(&state.db_pool, &request)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(department.into())))
}

pub async fn update_department(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<DepartmentRequest>,
) -> Result<Json<Department>, AppError> {
    let request = payload.validated()?;

    let department = organization::update_department(&state.db_pool, id, &request)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Department", id))?;

    Ok(Json(department.into()))
}

pub async fn delete_department(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    ensure_unreferenced(
        &state.db_pool,
        "department",
        dependents::DEPARTMENT_REFERENCES,
        id,
    )
    .await?;

    let deleted = organization::delete_department(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Department", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_faculty(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<FacultyView>>, AppError> {
    let faculty = organization::list_faculty(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(faculty.into_iter().map(FacultyView::from).collect()))
}

pub async fn get_faculty(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Faculty>, AppError> {
    let faculty = organization::get_faculty_by_id(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Faculty member", id))?;

    Ok(Json(faculty.into()))
}

pub async fn create_faculty(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<FacultyRequest>,
) -> Result<(StatusCode, Json<Faculty>), AppError> {
    let request = payload.validated()?;

    let faculty = organization::create_faculty(&state.db_pool, &request)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(faculty.into())))
}

pub async fn update_faculty(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<FacultyRequest>,
) -> Result<Json<Faculty>, AppError> {
    let request = payload.validated()?;

    let faculty = organization::update_faculty(&state.db_pool, id, &request)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Faculty member", id))?;

    Ok(Json(faculty.into()))
}

pub async fn delete_faculty(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    ensure_unreferenced(
        &state.db_pool,
        "faculty member",
        dependents::FACULTY_REFERENCES,
        id,
    )
    .await?;

    let deleted = organization::delete_faculty(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Faculty member", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
