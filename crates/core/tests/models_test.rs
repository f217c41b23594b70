use chrono::{NaiveDate, NaiveTime, Utc};
use fake::{
    faker::{internet::en::SafeEmail, name::en::FirstName, name::en::LastName},
    Fake,
};
use pretty_assertions::assert_eq;
use registrar_core::{
    errors::RegistrarError,
    models::{
        assignment::AssignmentFilter,
        calendar::{CurrentSemesterRequest, SessionRequest},
        organization::{DepartmentRequest, FacultyRequest},
        student::{AttendanceRequest, AttendanceStatus, StudentRequest},
        timetable::{DayOfWeek, TimeSlot, TimeSlotFilter, TimeSlotRequest},
    },
};
use rstest::rstest;
use serde_json::{from_str, json, to_string};
use serde_test::{assert_tokens, Token};
use uuid::Uuid;

#[test]
fn test_day_of_week_tokens() {
    assert_tokens(
        &DayOfWeek::Monday,
        &[Token::UnitVariant {
            name: "DayOfWeek",
            variant: "Monday",
        }],
    );
}

#[rstest]
#[case("Monday", DayOfWeek::Monday)]
#[case("tuesday", DayOfWeek::Tuesday)]
#[case("WED", DayOfWeek::Wednesday)]
#[case(" thu ", DayOfWeek::Thursday)]
#[case("Sun", DayOfWeek::Sunday)]
fn test_day_of_week_parsing(#[case] input: &str, #[case] expected: DayOfWeek) {
    assert_eq!(input.parse::<DayOfWeek>().unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("Mo")]
#[case("Someday")]
fn test_day_of_week_rejects_unknown(#[case] input: &str) {
    assert!(input.parse::<DayOfWeek>().is_err());
}

#[test]
fn test_time_slot_serialization() {
    let slot = TimeSlot {
        id: Uuid::new_v4(),
        course_id: Uuid::new_v4(),
        day: DayOfWeek::Friday,
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        room: "A-101".to_string(),
        instructor_id: Uuid::new_v4(),
        created_at: Utc::now(),
    };

    let json = to_string(&slot).expect("Failed to serialize time slot");
    assert!(json.contains(r#""day":"Friday""#));
    assert!(json.contains(r#""start_time":"09:00:00""#));

    let deserialized: TimeSlot = from_str(&json).expect("Failed to deserialize time slot");
    assert_eq!(deserialized, slot);
}

#[test]
fn test_time_slot_request_accepts_seconds_and_minutes() {
    let request: TimeSlotRequest = serde_json::from_value(json!({
        "course_id": Uuid::new_v4(),
        "day": "Thursday",
        "start_time": "23:00",
        "end_time": "01:00:00",
        "room": "Observatory",
        "instructor_id": Uuid::new_v4(),
    }))
    .unwrap();

    let slot = request.validate().unwrap();
    assert_eq!(slot.day, DayOfWeek::Thursday);
    assert!(slot.interval().wraps_midnight());
}

#[test]
fn test_time_slot_request_missing_times_is_invalid_interval() {
    let request: TimeSlotRequest = serde_json::from_value(json!({
        "course_id": Uuid::new_v4(),
        "room": "A-101",
        "instructor_id": Uuid::new_v4(),
    }))
    .unwrap();

    assert!(matches!(request.validate(), Err(RegistrarError::InvalidInterval(_))));
}

#[test]
fn test_time_slot_request_blank_room_is_validation_error() {
    let request = TimeSlotRequest {
        course_id: Uuid::new_v4(),
        day: "Monday".to_string(),
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        room: "   ".to_string(),
        instructor_id: Uuid::new_v4(),
    };

    assert!(matches!(request.validate(), Err(RegistrarError::Validation(_))));
}

#[test]
fn test_time_slot_filter_from_query() {
    let filter: TimeSlotFilter = serde_json::from_value(json!({ "day": "Saturday" })).unwrap();
    assert_eq!(filter.day, Some(DayOfWeek::Saturday));

    let filter: TimeSlotFilter = serde_json::from_value(json!({})).unwrap();
    assert_eq!(filter.day, None);
}

#[rstest]
#[case("Saturday", Some(DayOfWeek::Saturday))]
#[case("saturday", Some(DayOfWeek::Saturday))]
#[case("SAT", Some(DayOfWeek::Saturday))]
#[case("tue", Some(DayOfWeek::Tuesday))]
#[case("", None)]
#[case("  ", None)]
fn test_time_slot_filter_accepts_request_spellings(
    #[case] day: &str,
    #[case] expected: Option<DayOfWeek>,
) {
    let filter: TimeSlotFilter = serde_json::from_value(json!({ "day": day })).unwrap();
    assert_eq!(filter.day, expected);
}

#[test]
fn test_time_slot_filter_rejects_unknown_day() {
    let result = serde_json::from_value::<TimeSlotFilter>(json!({ "day": "Caturday" }));
    assert!(result.is_err());
}

#[test]
fn test_department_request_trims_name() {
    let request = DepartmentRequest {
        name: "  Physics ".to_string(),
    }
    .validated()
    .unwrap();
    assert_eq!(request.name, "Physics");

    let blank = DepartmentRequest {
        name: "\t".to_string(),
    };
    assert!(matches!(blank.validated(), Err(RegistrarError::Validation(_))));
}

#[test]
fn test_faculty_request_with_generated_names() {
    let first_name: String = FirstName().fake();
    let last_name: String = LastName().fake();
    let email: String = SafeEmail().fake();

    let request = FacultyRequest {
        first_name: first_name.clone(),
        last_name: last_name.clone(),
        email: email.clone(),
        department_id: None,
    }
    .validated()
    .unwrap();

    assert_eq!(request.first_name, first_name);
    assert_eq!(request.last_name, last_name);
    assert_eq!(request.email, email);
}

#[rstest]
#[case("not-an-email")]
#[case("@example.com")]
#[case("someone@localhost")]
fn test_student_request_rejects_bad_email(#[case] email: &str) {
    let request = StudentRequest {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        enrollment_no: "2024-001".to_string(),
        email: email.to_string(),
        department_id: None,
    };

    assert!(matches!(request.validated(), Err(RegistrarError::Validation(_))));
}

#[rstest]
#[case(2024, 2025, true)]
#[case(2024, 2024, true)]
#[case(2025, 2024, false)]
fn test_session_year_order(#[case] start_year: i32, #[case] end_year: i32, #[case] valid: bool) {
    let result = SessionRequest {
        start_year,
        end_year,
    }
    .validated();
    assert_eq!(result.is_ok(), valid);
}

#[test]
fn test_current_semester_date_order() {
    let program_id = Uuid::new_v4();
    let semester_id = Uuid::new_v4();
    let start_date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let end_date = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();

    let ok = CurrentSemesterRequest {
        program_id,
        semester_id,
        start_date,
        end_date,
    };
    assert!(ok.validated().is_ok());

    let inverted = CurrentSemesterRequest {
        program_id,
        semester_id,
        start_date: end_date,
        end_date: start_date,
    };
    assert!(matches!(inverted.validated(), Err(RegistrarError::Validation(_))));
}

#[test]
fn test_attendance_defaults_to_absent() {
    let request: AttendanceRequest = serde_json::from_value(json!({
        "student_id": Uuid::new_v4(),
        "course_id": Uuid::new_v4(),
        "attendance_date": "2025-03-14",
    }))
    .unwrap();

    assert_eq!(request.status(), AttendanceStatus::Absent);
    assert_eq!(AttendanceStatus::from_flag(true).as_str(), "Present");
}

#[test]
fn test_assignment_filter_emptiness() {
    assert!(AssignmentFilter::default().is_empty());

    let filter = AssignmentFilter {
        session_id: Some(Uuid::new_v4()),
        ..AssignmentFilter::default()
    };
    assert!(!filter.is_empty());
}

#[test]
fn test_blank_assignment_filter_values_are_unset() {
    let filter: AssignmentFilter = serde_json::from_value(json!({
        "program_id": "",
        "session_id": " ",
        "current_semester_id": "",
    }))
    .unwrap();

    assert_eq!(filter, AssignmentFilter::default());
    assert!(filter.is_empty());
}

#[test]
fn test_assignment_filter_reads_set_values() {
    let program_id = Uuid::new_v4();
    let filter: AssignmentFilter = serde_json::from_value(json!({
        "program_id": program_id.to_string(),
        "session_id": "",
    }))
    .unwrap();

    assert_eq!(filter.program_id, Some(program_id));
    assert_eq!(filter.session_id, None);
    assert_eq!(filter.current_semester_id, None);
    assert!(serde_json::from_value::<AssignmentFilter>(json!({ "program_id": "42" })).is_err());
}
