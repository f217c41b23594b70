use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::{eyre, Report};
use registrar_core::models::{
    assignment::{CourseAssignment, CourseAssignmentView},
    calendar::{CurrentSemester, CurrentSemesterView, Program, ProgramView, Semester, Session},
    course::{
        Course, CourseView, EnrolledTeacher, EnrolledTeacherView, Enrollment, EnrollmentView,
        OfferedCourse, RosterEntry,
    },
    organization::{Department, Faculty, FacultyView},
    student::{Attendance, AttendanceStatus, AttendanceView, Student, StudentView},
    timetable::{DayOfWeek, TimeSlot, TimeSlotView},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDepartment {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbDepartment> for Department {
    fn from(row: DbDepartment) -> Self {
        Department {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbFaculty {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<DbFaculty> for Faculty {
    fn from(row: DbFaculty) -> Self {
        Faculty {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            department_id: row.department_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbFacultyRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
}

impl From<DbFacultyRow> for FacultyView {
    fn from(row: DbFacultyRow) -> Self {
        FacultyView {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            department_id: row.department_id,
            department_name: row.department_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCourse {
    pub id: Uuid,
    pub name: String,
    pub department_id: Option<Uuid>,
    pub faculty_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<DbCourse> for Course {
    fn from(row: DbCourse) -> Self {
        Course {
            id: row.id,
            name: row.name,
            department_id: row.department_id,
            faculty_id: row.faculty_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCourseRow {
    pub id: Uuid,
    pub name: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub faculty_id: Option<Uuid>,
    pub faculty_name: Option<String>,
}

impl From<DbCourseRow> for CourseView {
    fn from(row: DbCourseRow) -> Self {
        CourseView {
            id: row.id,
            name: row.name,
            department_id: row.department_id,
            department_name: row.department_name,
            faculty_id: row.faculty_id,
            faculty_name: row.faculty_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbOfferedCourse {
    pub id: Uuid,
    pub name: String,
    pub department_name: String,
    pub faculty_name: String,
}

impl From<DbOfferedCourse> for OfferedCourse {
    fn from(row: DbOfferedCourse) -> Self {
        OfferedCourse {
            id: row.id,
            name: row.name,
            department_name: row.department_name,
            faculty_name: row.faculty_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRosterRow {
    pub student_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub enrollment_no: String,
    pub email: String,
}

impl From<DbRosterRow> for RosterEntry {
    fn from(row: DbRosterRow) -> Self {
        RosterEntry {
            student_id: row.student_id,
            first_name: row.first_name,
            last_name: row.last_name,
            enrollment_no: row.enrollment_no,
            email: row.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEnrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub semester_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<DbEnrollment> for Enrollment {
    fn from(row: DbEnrollment) -> Self {
        Enrollment {
            id: row.id,
            student_id: row.student_id,
            course_id: row.course_id,
            semester_id: row.semester_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEnrollmentRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub course_id: Uuid,
    pub course_name: String,
    pub semester_id: Uuid,
    pub semester_name: String,
}

impl From<DbEnrollmentRow> for EnrollmentView {
    fn from(row: DbEnrollmentRow) -> Self {
        EnrollmentView {
            id: row.id,
            student_id: row.student_id,
            student_name: row.student_name,
            course_id: row.course_id,
            course_name: row.course_name,
            semester_id: row.semester_id,
            semester_name: row.semester_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEnrolledTeacher {
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub course_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<DbEnrolledTeacher> for EnrolledTeacher {
    fn from(row: DbEnrolledTeacher) -> Self {
        EnrolledTeacher {
            id: row.id,
            faculty_id: row.faculty_id,
            course_id: row.course_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEnrolledTeacherRow {
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub course_id: Uuid,
    pub course_name: String,
}

impl From<DbEnrolledTeacherRow> for EnrolledTeacherView {
    fn from(row: DbEnrolledTeacherRow) -> Self {
        EnrolledTeacherView {
            id: row.id,
            faculty_id: row.faculty_id,
            first_name: row.first_name,
            last_name: row.last_name,
            course_id: row.course_id,
            course_name: row.course_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudent {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub enrollment_no: String,
    pub email: String,
    pub department_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<DbStudent> for Student {
    fn from(row: DbStudent) -> Self {
        Student {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            enrollment_no: row.enrollment_no,
            email: row.email,
            department_id: row.department_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudentRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub enrollment_no: String,
    pub email: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
}

impl From<DbStudentRow> for StudentView {
    fn from(row: DbStudentRow) -> Self {
        StudentView {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            enrollment_no: row.enrollment_no,
            email: row.email,
            department_id: row.department_id,
            department_name: row.department_name,
        }
    }
}

fn parse_status(status: &str) -> Result<AttendanceStatus, Report> {
    match status {
        "Present" => Ok(AttendanceStatus::Present),
        "Absent" => Ok(AttendanceStatus::Absent),
        other => Err(eyre!("Unknown attendance status in database: {other:?}")),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAttendance {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub attendance_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAttendance> for Attendance {
    type Error = Report;

    fn try_from(row: DbAttendance) -> Result<Self, Self::Error> {
        Ok(Attendance {
            id: row.id,
            student_id: row.student_id,
            course_id: row.course_id,
            attendance_date: row.attendance_date,
            status: parse_status(&row.status)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAttendanceRow {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: Option<String>,
    pub course_id: Uuid,
    pub course_name: Option<String>,
    pub attendance_date: NaiveDate,
    pub status: String,
}

impl TryFrom<DbAttendanceRow> for AttendanceView {
    type Error = Report;

    fn try_from(row: DbAttendanceRow) -> Result<Self, Self::Error> {
        Ok(AttendanceView {
            id: row.id,
            student_id: row.student_id,
            student_name: row.student_name,
            course_id: row.course_id,
            course_name: row.course_name,
            attendance_date: row.attendance_date,
            status: parse_status(&row.status)?,
        })
    }
}

fn parse_day(day: &str) -> Result<DayOfWeek, Report> {
    day.parse::<DayOfWeek>()
        .map_err(|e| eyre!("Invalid timetable row: {e}"))
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: Uuid,
    pub course_id: Uuid,
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
    pub instructor_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbTimeSlot> for TimeSlot {
    type Error = Report;

    fn try_from(row: DbTimeSlot) -> Result<Self, Self::Error> {
        Ok(TimeSlot {
            id: row.id,
            course_id: row.course_id,
            day: parse_day(&row.day_of_week)?,
            start_time: row.start_time,
            end_time: row.end_time,
            room: row.room,
            instructor_id: row.instructor_id,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlotRow {
    pub id: Uuid,
    pub course_id: Uuid,
    pub course_name: Option<String>,
    pub day_of_week: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
    pub instructor_id: Uuid,
    pub instructor_name: Option<String>,
}

impl TryFrom<DbTimeSlotRow> for TimeSlotView {
    type Error = Report;

    fn try_from(row: DbTimeSlotRow) -> Result<Self, Self::Error> {
        Ok(TimeSlotView {
            id: row.id,
            course_id: row.course_id,
            course_name: row.course_name,
            day: parse_day(&row.day_of_week)?,
            start_time: row.start_time,
            end_time: row.end_time,
            room: row.room,
            instructor_id: row.instructor_id,
            instructor_name: row.instructor_name,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSemester {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbSemester> for Semester {
    fn from(row: DbSemester) -> Self {
        Semester {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSession {
    pub id: Uuid,
    pub start_year: i32,
    pub end_year: i32,
    pub created_at: DateTime<Utc>,
}

impl From<DbSession> for Session {
    fn from(row: DbSession) -> Self {
        Session {
            id: row.id,
            start_year: row.start_year,
            end_year: row.end_year,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProgram {
    pub id: Uuid,
    pub name: String,
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<DbProgram> for Program {
    fn from(row: DbProgram) -> Self {
        Program {
            id: row.id,
            name: row.name,
            session_id: row.session_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProgramRow {
    pub id: Uuid,
    pub name: String,
    pub session_id: Uuid,
    pub start_year: i32,
    pub end_year: i32,
}

impl From<DbProgramRow> for ProgramView {
    fn from(row: DbProgramRow) -> Self {
        ProgramView {
            id: row.id,
            name: row.name,
            session_id: row.session_id,
            start_year: row.start_year,
            end_year: row.end_year,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCurrentSemester {
    pub id: Uuid,
    pub program_id: Uuid,
    pub semester_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<DbCurrentSemester> for CurrentSemester {
    fn from(row: DbCurrentSemester) -> Self {
        CurrentSemester {
            id: row.id,
            program_id: row.program_id,
            semester_id: row.semester_id,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCurrentSemesterRow {
    pub id: Uuid,
    pub program_id: Uuid,
    pub program_name: String,
    pub semester_id: Uuid,
    pub semester_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<DbCurrentSemesterRow> for CurrentSemesterView {
    fn from(row: DbCurrentSemesterRow) -> Self {
        CurrentSemesterView {
            id: row.id,
            program_id: row.program_id,
            program_name: row.program_name,
            semester_id: row.semester_id,
            semester_name: row.semester_name,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCourseAssignment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub program_id: Uuid,
    pub session_id: Uuid,
    pub current_semester_id: Uuid,
    pub course_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<DbCourseAssignment> for CourseAssignment {
    fn from(row: DbCourseAssignment) -> Self {
        CourseAssignment {
            id: row.id,
            student_id: row.student_id,
            program_id: row.program_id,
            session_id: row.session_id,
            current_semester_id: row.current_semester_id,
            course_id: row.course_id,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCourseAssignmentRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub program_name: String,
    pub start_year: i32,
    pub end_year: i32,
    pub semester_name: String,
    pub course_name: String,
}

impl From<DbCourseAssignmentRow> for CourseAssignmentView {
    fn from(row: DbCourseAssignmentRow) -> Self {
        CourseAssignmentView {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            program_name: row.program_name,
            start_year: row.start_year,
            end_year: row.end_year,
            semester_name: row.semester_name,
            course_name: row.course_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn time_slot_row(day: &str) -> DbTimeSlot {
        DbTimeSlot {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            day_of_week: day.to_string(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            room: "A-101".to_string(),
            instructor_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case("Monday", DayOfWeek::Monday)]
    #[case("Wednesday", DayOfWeek::Wednesday)]
    #[case("Sunday", DayOfWeek::Sunday)]
    fn time_slot_row_converts_stored_day(#[case] stored: &str, #[case] expected: DayOfWeek) {
        let row = time_slot_row(stored);
        let id = row.id;

        let slot = TimeSlot::try_from(row).unwrap();
        assert_eq!(slot.id, id);
        assert_eq!(slot.day, expected);
    }

    #[test]
    fn time_slot_row_with_unknown_day_is_an_error() {
        assert!(TimeSlot::try_from(time_slot_row("Caturday")).is_err());
    }

    #[test]
    fn attendance_status_round_trips_through_storage_text() {
        for status in [AttendanceStatus::Present, AttendanceStatus::Absent] {
            assert_eq!(parse_status(status.as_str()).unwrap(), status);
        }
        assert!(parse_status("Late").is_err());
    }
}
