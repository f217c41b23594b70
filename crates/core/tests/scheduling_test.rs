use chrono::{NaiveTime, Utc};
use mockall::predicate;
use registrar_core::{
    errors::RegistrarError,
    mock::MockTimetableStore,
    models::timetable::{DayOfWeek, NewTimeSlot, TimeSlot, TimeSlotRequest},
    scheduling::{add_time_slot, update_time_slot},
};
use tokio_test::block_on;
use uuid::Uuid;

fn request(day: &str, start: &str, end: &str, room: &str, instructor_id: Uuid) -> TimeSlotRequest {
    TimeSlotRequest {
        course_id: Uuid::new_v4(),
        day: day.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        room: room.to_string(),
        instructor_id,
    }
}

fn stored(id: Uuid, slot: &NewTimeSlot) -> TimeSlot {
    TimeSlot {
        id,
        course_id: slot.course_id,
        day: slot.day,
        start_time: slot.start_time,
        end_time: slot.end_time,
        room: slot.room.clone(),
        instructor_id: slot.instructor_id,
        created_at: Utc::now(),
    }
}

fn booked(day: DayOfWeek, start: (u32, u32), end: (u32, u32), room: &str) -> TimeSlot {
    TimeSlot {
        id: Uuid::new_v4(),
        course_id: Uuid::new_v4(),
        day,
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        room: room.to_string(),
        instructor_id: Uuid::new_v4(),
        created_at: Utc::now(),
    }
}

#[test]
fn test_add_time_slot_inserts_when_free() {
    let mut store = MockTimetableStore::new();
    let new_id = Uuid::new_v4();

    store
        .expect_slots_on_day()
        .with(predicate::eq(DayOfWeek::Monday))
        .times(1)
        .returning(|day| Ok(vec![booked(day, (8, 0), (9, 0), "A-101")]));
    store
        .expect_insert_slot()
        .withf(|slot| slot.room == "A-101" && slot.day == DayOfWeek::Monday)
        .times(1)
        .returning(move |slot| Ok(stored(new_id, slot)));

    let req = request("Monday", "09:00", "10:30", " A-101 ", Uuid::new_v4());
    let slot = block_on(add_time_slot(&mut store, &req)).expect("slot should be created");

    assert_eq!(slot.id, new_id);
    assert_eq!(slot.room, "A-101");
    assert_eq!(slot.end_time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
}

#[test]
fn test_add_time_slot_rejects_conflict_without_inserting() {
    let mut store = MockTimetableStore::new();
    let existing = booked(DayOfWeek::Tuesday, (9, 0), (11, 0), "Hall 3");
    let existing_id = existing.id;

    store
        .expect_slots_on_day()
        .returning(move |_| Ok(vec![existing.clone()]));
    store.expect_insert_slot().never();

    let req = request("tue", "10:00", "12:00", "Hall 3", Uuid::new_v4());
    let err = block_on(add_time_slot(&mut store, &req)).unwrap_err();

    match err {
        RegistrarError::ScheduleConflict { conflicting_id } => assert_eq!(conflicting_id, existing_id),
        other => panic!("expected schedule conflict, got {other:?}"),
    }
}

#[test]
fn test_add_time_slot_rejects_zero_length_before_storage() {
    let mut store = MockTimetableStore::new();
    store.expect_slots_on_day().never();
    store.expect_insert_slot().never();

    let req = request("Monday", "09:00", "09:00", "A-101", Uuid::new_v4());
    let err = block_on(add_time_slot(&mut store, &req)).unwrap_err();

    assert!(matches!(err, RegistrarError::InvalidInterval(_)));
}

#[test]
fn test_add_time_slot_rejects_malformed_day_and_time() {
    let mut store = MockTimetableStore::new();
    store.expect_slots_on_day().never();

    let bad_day = request("Funday", "09:00", "10:00", "A-101", Uuid::new_v4());
    let bad_time = request("Monday", "9am", "10:00", "A-101", Uuid::new_v4());
    let missing_time = request("Monday", "", "10:00", "A-101", Uuid::new_v4());

    for req in [bad_day, bad_time, missing_time] {
        let err = block_on(add_time_slot(&mut store, &req)).unwrap_err();
        assert!(matches!(err, RegistrarError::InvalidInterval(_)), "{err:?}");
    }
}

#[test]
fn test_add_time_slot_propagates_storage_failure() {
    let mut store = MockTimetableStore::new();
    store
        .expect_slots_on_day()
        .returning(|_| Err(eyre::eyre!("connection reset")));
    store.expect_insert_slot().never();

    let req = request("Monday", "09:00", "10:00", "A-101", Uuid::new_v4());
    let err = block_on(add_time_slot(&mut store, &req)).unwrap_err();

    assert!(matches!(err, RegistrarError::Database(_)));
}

#[test]
fn test_update_time_slot_ignores_its_own_booking() {
    let mut store = MockTimetableStore::new();
    let instructor = Uuid::new_v4();
    let req = request("Wednesday", "14:00", "15:00", "Lab", instructor);
    let current = stored(Uuid::new_v4(), &req.validate().unwrap());
    let id = current.id;
    let lookup = current.clone();

    store
        .expect_slot_by_id()
        .with(predicate::eq(id))
        .returning(move |_| Ok(Some(lookup.clone())));
    store
        .expect_slots_on_day()
        .returning(move |_| Ok(vec![current.clone()]));
    store
        .expect_update_slot()
        .with(predicate::eq(id), predicate::always())
        .times(1)
        .returning(|id, slot| Ok(Some(stored(id, slot))));

    let slot = block_on(update_time_slot(&mut store, id, &req)).expect("update should succeed");
    assert_eq!(slot.id, id);
}

#[test]
fn test_update_time_slot_rejects_conflict_with_another_booking() {
    let mut store = MockTimetableStore::new();
    let id = Uuid::new_v4();
    let req = request("Wednesday", "14:00", "15:00", "Lab", Uuid::new_v4());
    let own = stored(id, &req.validate().unwrap());
    let other = booked(DayOfWeek::Wednesday, (14, 30), (16, 0), "Lab");
    let other_id = other.id;
    let lookup = own.clone();

    store
        .expect_slot_by_id()
        .returning(move |_| Ok(Some(lookup.clone())));
    store
        .expect_slots_on_day()
        .returning(move |_| Ok(vec![own.clone(), other.clone()]));
    store.expect_update_slot().never();

    let err = block_on(update_time_slot(&mut store, id, &req)).unwrap_err();
    assert!(matches!(
        err,
        RegistrarError::ScheduleConflict { conflicting_id } if conflicting_id == other_id
    ));
}

#[test]
fn test_update_time_slot_missing_entry_is_not_found() {
    let mut store = MockTimetableStore::new();
    store.expect_slot_by_id().returning(|_| Ok(None));
    store.expect_slots_on_day().never();
    store.expect_update_slot().never();

    let req = request("Friday", "08:00", "09:00", "A-101", Uuid::new_v4());
    let err = block_on(update_time_slot(&mut store, Uuid::new_v4(), &req)).unwrap_err();

    assert!(matches!(err, RegistrarError::NotFound(_)));
}
