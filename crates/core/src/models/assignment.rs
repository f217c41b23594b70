use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::params;

/// A course assigned to a student within a program's current semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseAssignment {
    pub id: Uuid,
    pub student_id: Uuid,
    pub program_id: Uuid,
    pub session_id: Uuid,
    pub current_semester_id: Uuid,
    pub course_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseAssignmentView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub program_name: String,
    pub start_year: i32,
    pub end_year: i32,
    pub semester_name: String,
    pub course_name: String,
}

/// The session is not part of the request; it is taken from the program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseAssignmentRequest {
    pub student_id: Uuid,
    pub program_id: Uuid,
    pub current_semester_id: Uuid,
    pub course_id: Uuid,
}

/// Optional narrowing of the assignment listing; unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentFilter {
    #[serde(default, deserialize_with = "params::optional")]
    pub program_id: Option<Uuid>,
    #[serde(default, deserialize_with = "params::optional")]
    pub session_id: Option<Uuid>,
    #[serde(default, deserialize_with = "params::optional")]
    pub current_semester_id: Option<Uuid>,
}

impl AssignmentFilter {
    pub fn is_empty(&self) -> bool {
        self.program_id.is_none() && self.session_id.is_none() && self.current_semester_id.is_none()
    }
}
