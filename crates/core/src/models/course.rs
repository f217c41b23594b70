use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::RegistrarResult;
use crate::validation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub department_id: Option<Uuid>,
    pub faculty_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseView {
    pub id: Uuid,
    pub name: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
    pub faculty_id: Option<Uuid>,
    pub faculty_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRequest {
    pub name: String,
    pub department_id: Option<Uuid>,
    pub faculty_id: Option<Uuid>,
}

impl CourseRequest {
    pub fn validated(self) -> RegistrarResult<Self> {
        Ok(Self {
            name: validation::required("name", &self.name)?,
            department_id: self.department_id,
            faculty_id: self.faculty_id,
        })
    }
}

/// A course that has both a department and a teaching faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferedCourse {
    pub id: Uuid,
    pub name: String,
    pub department_name: String,
    pub faculty_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub student_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub enrollment_no: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRoster {
    pub course_id: Uuid,
    pub course_name: String,
    pub students: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub semester_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentView {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub course_id: Uuid,
    pub course_name: String,
    pub semester_id: Uuid,
    pub semester_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub semester_id: Uuid,
}

/// A faculty member enrolled to teach a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledTeacher {
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub course_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledTeacherView {
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub course_id: Uuid,
    pub course_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrolledTeacherRequest {
    pub faculty_id: Uuid,
    pub course_id: Uuid,
}
