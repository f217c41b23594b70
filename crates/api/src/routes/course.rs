use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers::course, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/courses", get(course::list_courses).post(course::create_course))
        .route(
            "/api/courses/:id",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route("/api/courses/:id/students", get(course::get_course_roster))
        .route("/api/offered-courses", get(course::list_offered_courses))
        .route(
            "/api/enrollments",
            get(course::list_enrollments).post(course::create_enrollment),
        )
        .route("/api/enrollments/:id", delete(course::delete_enrollment))
        .route(
            "/api/enrolled-teachers",
            get(course::list_enrolled_teachers).post(course::create_enrolled_teacher),
        )
        .route(
            "/api/enrolled-teachers/:id",
            delete(course::delete_enrolled_teacher),
        )
}
