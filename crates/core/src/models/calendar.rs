use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::RegistrarResult;
use crate::validation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterRequest {
    pub name: String,
}

impl SemesterRequest {
    pub fn validated(self) -> RegistrarResult<Self> {
        Ok(Self {
            name: validation::required("name", &self.name)?,
        })
    }
}

/// An academic session such as 2024-2025.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub start_year: i32,
    pub end_year: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub start_year: i32,
    pub end_year: i32,
}

impl SessionRequest {
    pub fn validated(self) -> RegistrarResult<Self> {
        validation::year_range(self.start_year, self.end_year)?;
        Ok(self)
    }
}

/// A degree program offered in one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    pub name: String,
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramView {
    pub id: Uuid,
    pub name: String,
    pub session_id: Uuid,
    pub start_year: i32,
    pub end_year: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramRequest {
    pub name: String,
    pub session_id: Uuid,
}

impl ProgramRequest {
    pub fn validated(self) -> RegistrarResult<Self> {
        Ok(Self {
            name: validation::required("name", &self.name)?,
            session_id: self.session_id,
        })
    }
}

/// The semester a program is currently running, with its calendar dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSemester {
    pub id: Uuid,
    pub program_id: Uuid,
    pub semester_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSemesterView {
    pub id: Uuid,
    pub program_id: Uuid,
    pub program_name: String,
    pub semester_id: Uuid,
    pub semester_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSemesterRequest {
    pub program_id: Uuid,
    pub semester_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl CurrentSemesterRequest {
    pub fn validated(self) -> RegistrarResult<Self> {
        validation::date_range(self.start_date, self.end_date)?;
        Ok(self)
    }
}
