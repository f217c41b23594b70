use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers::timetable, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/timetables",
            get(timetable::list_time_slots).post(timetable::create_time_slot),
        )
        .route(
            "/api/timetables/:id",
            get(timetable::get_time_slot)
                .put(timetable::update_time_slot)
                .delete(timetable::delete_time_slot),
        )
}
