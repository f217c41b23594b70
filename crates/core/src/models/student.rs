use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::RegistrarResult;
use crate::validation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub enrollment_no: String,
    pub email: String,
    pub department_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub enrollment_no: String,
    pub email: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub enrollment_no: String,
    pub email: String,
    pub department_id: Option<Uuid>,
}

impl StudentRequest {
    pub fn validated(self) -> RegistrarResult<Self> {
        Ok(Self {
            first_name: validation::required("first_name", &self.first_name)?,
            last_name: validation::required("last_name", &self.last_name)?,
            enrollment_no: validation::required("enrollment_no", &self.enrollment_no)?,
            email: validation::email("email", &self.email)?,
            department_id: self.department_id,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn from_flag(present: bool) -> Self {
        if present {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub attendance_date: NaiveDate,
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceView {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: Option<String>,
    pub course_id: Uuid,
    pub course_name: Option<String>,
    pub attendance_date: NaiveDate,
    pub status: AttendanceStatus,
}

/// A student is marked absent unless `present` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub attendance_date: NaiveDate,
    #[serde(default)]
    pub present: bool,
}

impl AttendanceRequest {
    pub fn status(&self) -> AttendanceStatus {
        AttendanceStatus::from_flag(self.present)
    }
}
