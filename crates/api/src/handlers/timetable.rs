use axum::{extract::State, http::StatusCode, Json};
use registrar_core::{
    errors::RegistrarError,
    models::timetable::{TimeSlot, TimeSlotFilter, TimeSlotRequest, TimeSlotView},
    scheduling,
};
use registrar_db::{repositories::timetable, store::PgTimetableStore};
use std::sync::Arc;
use uuid::Uuid;

use super::not_found;
use crate::{
    middleware::{
        error_handling::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    ApiState,
};

pub async fn list_time_slots(
    State(state): State<Arc<ApiState>>,
    ApiQuery(filter): ApiQuery<TimeSlotFilter>,
) -> Result<Json<Vec<TimeSlotView>>, AppError> {
    let slots = timetable::list_time_slots(&state.db_pool, filter.day)
        .await
        .map_err(RegistrarError::Database)?;

    let views = slots
        .into_iter()
        .map(TimeSlotView::try_from)
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(Json(views))
}

pub async fn get_time_slot(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<TimeSlot>, AppError> {
    let slot = timetable::get_time_slot_by_id(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?
        .ok_or_else(|| not_found("Timetable entry", id))?;

    Ok(Json(TimeSlot::try_from(slot)?))
}

/// Books a new slot; rejected when it overlaps an entry sharing its room or
/// instructor on the same day.
pub async fn create_time_slot(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<TimeSlotRequest>,
) -> Result<(StatusCode, Json<TimeSlot>), AppError> {
    let mut store = PgTimetableStore::new(&state.db_pool);

    let slot = scheduling::add_time_slot(&mut store, &payload).await?;
    store.commit().await.map_err(RegistrarError::Database)?;

    Ok((StatusCode::CREATED, Json(slot)))
}

pub async fn update_time_slot(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<TimeSlotRequest>,
) -> Result<Json<TimeSlot>, AppError> {
    let mut store = PgTimetableStore::new(&state.db_pool);

    let slot = scheduling::update_time_slot(&mut store, id, &payload).await?;
    store.commit().await.map_err(RegistrarError::Database)?;

    Ok(Json(slot))
}

pub async fn delete_time_slot(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let deleted = timetable::delete_time_slot(&state.db_pool, id)
        .await
        .map_err(RegistrarError::Database)?;

    if !deleted {
        return Err(not_found("Timetable entry", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
