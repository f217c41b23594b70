//! Create and update workflows for timetable entries.
//!
//! Both workflows validate the request before touching storage, read the
//! slots already booked on the requested day, and only write when the
//! candidate collides with none of them.

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::conflict::find_conflict;
use crate::errors::{RegistrarError, RegistrarResult};
use crate::models::timetable::{DayOfWeek, NewTimeSlot, TimeSlot, TimeSlotRequest};

/// Storage seen by the timetable workflows.
///
/// A store is a unit of work. Implementations backed by a shared database must
/// keep other writers for `day` out from the call to [`slots_on_day`] until
/// the unit of work ends, otherwise two concurrent requests can both observe
/// an empty day and double-book it.
///
/// [`slots_on_day`]: TimetableStore::slots_on_day
#[async_trait]
pub trait TimetableStore: Send {
    async fn slots_on_day(&mut self, day: DayOfWeek) -> eyre::Result<Vec<TimeSlot>>;

    async fn slot_by_id(&mut self, id: Uuid) -> eyre::Result<Option<TimeSlot>>;

    async fn insert_slot(&mut self, slot: &NewTimeSlot) -> eyre::Result<TimeSlot>;

    async fn update_slot(&mut self, id: Uuid, slot: &NewTimeSlot) -> eyre::Result<Option<TimeSlot>>;
}

pub async fn add_time_slot<S>(store: &mut S, request: &TimeSlotRequest) -> RegistrarResult<TimeSlot>
where
    S: TimetableStore + ?Sized,
{
    let candidate = request.validate()?;
    ensure_free(store, &candidate, None).await?;

    let slot = store.insert_slot(&candidate).await?;
    info!(id = %slot.id, day = %slot.day, room = %slot.room, "Timetable entry created");
    Ok(slot)
}

pub async fn update_time_slot<S>(
    store: &mut S,
    id: Uuid,
    request: &TimeSlotRequest,
) -> RegistrarResult<TimeSlot>
where
    S: TimetableStore + ?Sized,
{
    let candidate = request.validate()?;

    if store.slot_by_id(id).await?.is_none() {
        return Err(RegistrarError::NotFound(format!(
            "Timetable entry with ID {id} not found"
        )));
    }

    ensure_free(store, &candidate, Some(id)).await?;

    let slot = store.update_slot(id, &candidate).await?.ok_or_else(|| {
        RegistrarError::NotFound(format!("Timetable entry with ID {id} not found"))
    })?;
    info!(id = %slot.id, day = %slot.day, room = %slot.room, "Timetable entry updated");
    Ok(slot)
}

async fn ensure_free<S>(
    store: &mut S,
    candidate: &NewTimeSlot,
    exclude_id: Option<Uuid>,
) -> RegistrarResult<()>
where
    S: TimetableStore + ?Sized,
{
    let booked = store.slots_on_day(candidate.day).await?;
    debug!(day = %candidate.day, booked = booked.len(), "Checking timetable conflicts");

    if let Some(conflict) = find_conflict(candidate, &booked, exclude_id) {
        warn!(
            day = %candidate.day,
            room = %candidate.room,
            instructor_id = %candidate.instructor_id,
            conflicting_id = %conflict.id,
            "Rejected timetable entry that collides with an existing one"
        );
        return Err(RegistrarError::ScheduleConflict {
            conflicting_id: conflict.id,
        });
    }

    Ok(())
}
