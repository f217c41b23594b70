use axum::{extract::State, http::StatusCode, Json};
use registrar_core::{
    errors::RegistrarError,
    models::assignment::{
        AssignmentFilter, CourseAssignment, CourseAssignmentRequest, CourseAssignmentView,
    },
};
use registrar_db::repositories::{assignment, calendar};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::not_found;
use crate::{
    middleware::{
        error_handling::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    ApiState,
};

pub async fn list_course_assignments(
    State(state): State<Arc<ApiState>>,
    ApiQuery(filter): ApiQuery<AssignmentFilter>,
) -> Result<Json<Vec<CourseAssignmentView>>, AppError> {
    debug!(?filter, "Listing course assignments");

    let assignments = assignment::list_course_assignments(&state.db_pool, &filter)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(assignments.into_iter().map(CourseAssignmentView::from).collect()))
}

/// Assigns a course to a student within a program's current semester.
///
/// The session is the one the program belongs to, and the current semester
/// must be one the program is running.
pub async fn create_course_assignment(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CourseAssignmentRequest>,
) -> Result<(StatusCode, Json<CourseAssignment>), AppError> {
    let program = calendar::get_program_by_id(&state.db_pool, payload.program_id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| {
            RegistrarError::Validation(format!("Program {} does not exist", payload.program_id))
        })?;

    let current = calendar::get_current_semester_by_id(&state.db_pool, payload.current_semester_id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| {
            RegistrarError::Validation(format!(
                "Current semester {} does not exist",
                payload.current_semester_id
            ))
        })?;

    if current.program_id != program.id {
        return Err(RegistrarError::Validation(format!(
            "Current semester {} does not belong to program {}",
            current.id, program.id
        ))
        .into());
    }

    let created = assignment::create_course_assignment(&state.db_pool, &payload, program.session_id)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn delete_course_assignment(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = assignment::delete_course_assignment(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Course assignment", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
