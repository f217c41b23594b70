use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers::assignment, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/course-assignments",
            get(assignment::list_course_assignments).post(assignment::create_course_assignment),
        )
        .route(
            "/api/course-assignments/:id",
            delete(assignment::delete_course_assignment),
        )
}
