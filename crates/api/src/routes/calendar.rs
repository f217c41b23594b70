use axum::{
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::{handlers::calendar, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/semesters",
            get(calendar::list_semesters).post(calendar::create_semester),
        )
        .route(
            "/api/semesters/:id",
            get(calendar::get_semester)
                .put(calendar::update_semester)
                .delete(calendar::delete_semester),
        )
        .route(
            "/api/sessions",
            get(calendar::list_sessions).post(calendar::create_session),
        )
        .route(
            "/api/sessions/:id",
            get(calendar::get_session)
                .put(calendar::update_session)
                .delete(calendar::delete_session),
        )
        .route(
            "/api/programs",
            get(calendar::list_programs).post(calendar::create_program),
        )
        .route(
            "/api/programs/:id",
            get(calendar::get_program)
                .put(calendar::update_program)
                .delete(calendar::delete_program),
        )
        .route(
            "/api/current-semesters",
            get(calendar::list_current_semesters).post(calendar::create_current_semester),
        )
        .route(
            "/api/current-semesters/:id",
            delete(calendar::delete_current_semester),
        )
}
