use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::models::timetable::{DayOfWeek, NewTimeSlot, TimeSlot};
use crate::scheduling::TimetableStore;

// Mock store for exercising the timetable workflows without a database
mock! {
    pub TimetableStore {}

    #[async_trait]
    impl TimetableStore for TimetableStore {
        async fn slots_on_day(&mut self, day: DayOfWeek) -> eyre::Result<Vec<TimeSlot>>;

        async fn slot_by_id(&mut self, id: Uuid) -> eyre::Result<Option<TimeSlot>>;

        async fn insert_slot(&mut self, slot: &NewTimeSlot) -> eyre::Result<TimeSlot>;

        async fn update_slot(
            &mut self,
            id: Uuid,
            slot: &NewTimeSlot,
        ) -> eyre::Result<Option<TimeSlot>>;
    }
}
