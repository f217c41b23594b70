use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::conflict::Interval;
use crate::errors::{RegistrarError, RegistrarResult};
use crate::params;
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown day of week: {0:?}")]
pub struct ParseDayError(pub String);

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// Zero-based position in the week, Monday first.
    pub fn ordinal(&self) -> i64 {
        match self {
            DayOfWeek::Monday => 0,
            DayOfWeek::Tuesday => 1,
            DayOfWeek::Wednesday => 2,
            DayOfWeek::Thursday => 3,
            DayOfWeek::Friday => 4,
            DayOfWeek::Saturday => 5,
            DayOfWeek::Sunday => 6,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = ParseDayError;

    /// Accepts full names and three-letter abbreviations, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| {
                let name = day.as_str().to_ascii_lowercase();
                name == wanted || name[..3] == wanted
            })
            .ok_or_else(|| ParseDayError(s.to_string()))
    }
}

/// A persisted timetable entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub course_id: Uuid,
    pub day: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
    pub instructor_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl TimeSlot {
    pub fn interval(&self) -> Interval {
        Interval::between(self.start_time, self.end_time)
    }

    /// The slot's schedule-relevant fields, as they would be proposed again.
    pub fn to_proposal(&self) -> NewTimeSlot {
        NewTimeSlot {
            course_id: self.course_id,
            day: self.day,
            start_time: self.start_time,
            end_time: self.end_time,
            room: self.room.clone(),
            instructor_id: self.instructor_id,
        }
    }
}

/// A validated timetable entry that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTimeSlot {
    pub course_id: Uuid,
    pub day: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
    pub instructor_id: Uuid,
}

impl NewTimeSlot {
    pub fn interval(&self) -> Interval {
        Interval::between(self.start_time, self.end_time)
    }
}

/// Body of the create and update timetable endpoints.
///
/// Day and times arrive as text so that malformed or missing values are
/// reported as [`RegistrarError::InvalidInterval`] rather than a generic
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotRequest {
    pub course_id: Uuid,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    pub room: String,
    pub instructor_id: Uuid,
}

impl TimeSlotRequest {
    pub fn validate(&self) -> RegistrarResult<NewTimeSlot> {
        let day = self
            .day
            .parse::<DayOfWeek>()
            .map_err(|e| RegistrarError::InvalidInterval(e.to_string()))?;
        let start_time = parse_time("start_time", &self.start_time)?;
        let end_time = parse_time("end_time", &self.end_time)?;
        Interval::checked(start_time, end_time)?;
        let room = validation::required("room", &self.room)?;

        Ok(NewTimeSlot {
            course_id: self.course_id,
            day,
            start_time,
            end_time,
            room,
            instructor_id: self.instructor_id,
        })
    }
}

fn parse_time(field: &str, value: &str) -> RegistrarResult<NaiveTime> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RegistrarError::InvalidInterval(format!("{field} is required")));
    }
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| {
            RegistrarError::InvalidInterval(format!(
                "{field} must be a 24-hour HH:MM time, got {value:?}"
            ))
        })
}

/// Query string of the timetable listing. The day accepts the same spellings
/// as request bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSlotFilter {
    #[serde(default, deserialize_with = "params::optional")]
    pub day: Option<DayOfWeek>,
}

/// A timetable entry joined with the names shown on listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotView {
    pub id: Uuid,
    pub course_id: Uuid,
    pub course_name: Option<String>,
    pub day: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room: String,
    pub instructor_id: Uuid,
    pub instructor_name: Option<String>,
}
