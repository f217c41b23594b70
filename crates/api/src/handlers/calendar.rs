use axum::{extract::State, http::StatusCode, Json};
use registrar_core::{
    errors::RegistrarError,
    models::calendar::{
        CurrentSemester, CurrentSemesterRequest, CurrentSemesterView, Program, ProgramRequest,
        ProgramView, Semester, SemesterRequest, Session, SessionRequest,
    },
};
use registrar_db::repositories::{calendar, dependents};
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

// Semesters

pub async fn list_semesters(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Semester>>, AppError> {
    let semesters = calendar::list_semesters(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(semesters.into_iter().map(Semester::from).collect()))
}

pub async fn get_semester(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Semester>, AppError> {
    let semester = calendar::get_semester_by_id(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Semester", id))?;

    Ok(Json(semester.into()))
}

pub async fn create_semester(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<SemesterRequest>,
) -> Result<(StatusCode, Json<Semester>), AppError> {
    let request = payload.validated()?;

    let semester = calendar::create_semester(&state.db_pool, &request)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(semester.into())))
}

pub async fn update_semester(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<SemesterRequest>,
) -> Result<Json<Semester>, AppError> {
    let request = payload.validated()?;

    let semester = calendar::update_semester(&state.db_pool, id, &request)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Semester", id))?;

    Ok(Json(semester.into()))
}

pub async fn delete_semester(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    ensure_unreferenced(&state.db_pool, "semester", dependents::SEMESTER_REFERENCES, id).await?;

    let deleted = calendar::delete_semester(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Semester", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

// Sessions

pub async fn list_sessions(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Session>>, AppError> {
    let sessions = calendar::list_sessions(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(sessions.into_iter().map(Session::from).collect()))
}

pub async fn get_session(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Session>, AppError> {
    let session = calendar::get_session_by_id(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Session", id))?;

    Ok(Json(session.into()))
}

pub async fn create_session(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<SessionRequest>,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let request = payload.validated()?;

    let session = calendar::create_session(&state.db_pool, &request)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(session.into())))
}

pub async fn update_session(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<SessionRequest>,
) -> Result<Json<Session>, AppError> {
    let request = payload.validated()?;

    let session = calendar::update_session(&state.db_pool, id, &request)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Session", id))?;

    Ok(Json(session.into()))
}

pub async fn delete_session(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    ensure_unreferenced(&state.db_pool, "session", dependents::SESSION_REFERENCES, id).await?;

    let deleted = calendar::delete_session(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Session", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

// Programs

pub async fn list_programs(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<ProgramView>>, AppError> {
    let programs = calendar::list_programs(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(programs.into_iter().map(ProgramView::from).collect()))
}

pub async fn get_program(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Program>, AppError> {
    let program = calendar::get_program_by_id(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Program", id))?;

    Ok(Json(program.into()))
}

pub async fn create_program(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<ProgramRequest>,
) -> Result<(StatusCode, Json<Program>), AppError> {
    let request = payload.validated()?;

    let program = calendar::create_program(&state.db_pool, &request)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(program.into())))
}

pub async fn update_program(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<ProgramRequest>,
) -> Result<Json<Program>, AppError> {
    let request = payload.validated()?;

    let program = calendar::update_program(&state.db_pool, id, &request)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Program", id))?;

    Ok(Json(program.into()))
}

pub async fn delete_program(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    ensure_unreferenced(&state.db_pool, "program", dependents::PROGRAM_REFERENCES, id).await?;

    let deleted = calendar::delete_program(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Program", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

// Current semesters

pub async fn list_current_semesters(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<CurrentSemesterView>>, AppError> {
    let current = calendar::list_current_semesters(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(current.into_iter().map(CurrentSemesterView::from).collect()))
}

pub async fn create_current_semester(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CurrentSemesterRequest>,
) -> Result<(StatusCode, Json<CurrentSemester>), AppError> {
    let request = payload.validated()?;

    let current = calendar::create_current_semester(&state.db_pool, &request)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(current.into())))
}

pub async fn delete_current_semester(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    ensure_unreferenced(
        &state.db_pool,
        "current semester",
        dependents::CURRENT_SEMESTER_REFERENCES,
        id,
    )
    .await?;

    let deleted = calendar::delete_current_semester(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Current semester", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
