use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers::student, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/students", get(student::list_students).post(student::create_student))
        .route(
            "/api/students/:id",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route(
            "/api/attendance",
            get(student::list_attendance).post(student::create_attendance),
        )
        .route(
            "/api/attendance/:id",
            get(student::get_attendance)
                .put(student::update_attendance)
                .delete(student::delete_attendance),
        )
}
