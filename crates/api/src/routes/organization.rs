use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers::organization, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/departments",
            get(organization::list_departments).post(organization::create_department),
        )
        .route(
            "/api/departments/:id",
            get(organization::get_department)
                .put(organization::update_department)
                .delete(organization::delete_department),
        )
        .route(
            "/api/faculty",
            get(organization::list_faculty).post(organization::create_faculty),
        )
        .route(
            "/api/faculty/:id",
            get(organization::get_faculty)
                .put(organization::update_faculty)
                .delete(organization::delete_faculty),
        )
}
