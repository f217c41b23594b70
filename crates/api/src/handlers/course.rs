use axum::{extract::State, http::StatusCode, Json};
use registrar_core::{
    errors::RegistrarError,
    models::course::{
        Course, CourseRequest, CourseRoster, CourseView, EnrolledTeacher, EnrolledTeacherRequest,
        EnrolledTeacherView, Enrollment, EnrollmentRequest, EnrollmentView, OfferedCourse,
        RosterEntry,
    },
};
use registrar_db::repositories::{course, dependents};
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

pub async fn list_courses(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<CourseView>>, AppError> {
    let courses = course::list_courses(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(courses.into_iter().map(CourseView::from).collect()))
}

pub async fn list_offered_courses(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<OfferedCourse>>, AppError> {
    let courses = course::list_offered_courses(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(courses.into_iter().map(OfferedCourse::from).collect()))
}

pub async fn get_course(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Course>, AppError> {
    let course = course::get_course_by_id(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Course", id))?;

    Ok(Json(course.into()))
}

pub async fn create_course(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CourseRequest>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let request = payload.validated()?;

    let course = course::create_course(&state.db_pool, &request)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(course.into())))
}

pub async fn update_course(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<CourseRequest>,
) -> Result<Json<Course>, AppError> {
    let request = payload.validated()?;

    let course = course::update_course(&state.db_pool, id, &request)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Course", id))?;

    Ok(Json(course.into()))
}

pub async fn delete_course(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    ensure_unreferenced(&state.db_pool, "course", dependents::COURSE_REFERENCES, id).await?;

    let deleted = course::delete_course(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Course", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Students enrolled in a course, each listed once.
pub async fn get_course_roster(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<CourseRoster>, AppError> {
    let course = course::get_course_by_id(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Course", id))?;

    let students = course::get_course_roster(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(CourseRoster {
        course_id: course.id,
        course_name: course.name,
        students: students.into_iter().map(RosterEntry::from).collect(),
    }))
}

pub async fn list_enrollments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<EnrollmentView>>, AppError> {
    let enrollments = course::list_enrollments(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(enrollments.into_iter().map(EnrollmentView::from).collect()))
}

pub async fn create_enrollment(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<EnrollmentRequest>,
) -> Result<(StatusCode, Json<Enrollment>), AppError> {
    let enrollment = course::create_enrollment(&state.db_pool, &payload)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(enrollment.into())))
}

pub async fn delete_enrollment(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = course::delete_enrollment(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Enrollment", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_enrolled_teachers(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<EnrolledTeacherView>>, AppError> {
    let teachers = course::list_enrolled_teachers(&state.db_pool)
        .await
        .map_err(RegistrarError::Database)?;

    Ok(Json(teachers.into_iter().map(EnrolledTeacherView::from).collect()))
}

pub async fn create_enrolled_teacher(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<EnrolledTeacherRequest>,
) -> Result<(StatusCode, Json<EnrolledTeacher>), AppError> {
    let teacher = course::create_enrolled_teacher(&state.db_pool, &payload)
        .await
        .map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(teacher.into())))
}

pub async fn delete_enrolled_teacher(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = course::delete_enrolled_teacher(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Enrolled teacher", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
