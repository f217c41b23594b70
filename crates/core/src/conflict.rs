//! Timetable collision rules.
//!
//! Two slots collide when they fall on the same day, share a room or an
//! instructor, and their time ranges overlap. Ranges are half-open, so a slot
//! ending at 10:00 does not collide with one starting at 10:00. A range whose
//! end is earlier than its start runs past midnight and occupies the tail of
//! the day plus the head of the day.

use chrono::{NaiveTime, Timelike};
use uuid::Uuid;

use crate::errors::{RegistrarError, RegistrarResult};
use crate::models::timetable::{NewTimeSlot, TimeSlot};

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time-of-day range in minutes since midnight, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: u16,
    end: u16,
}

impl Interval {
    /// Builds the range without rejecting zero-length input. A zero-length
    /// range overlaps nothing.
    pub fn between(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: minute_of_day(start),
            end: minute_of_day(end),
        }
    }

    /// Builds the range, rejecting `start == end` at minute granularity.
    pub fn checked(start: NaiveTime, end: NaiveTime) -> RegistrarResult<Self> {
        let interval = Self::between(start, end);
        if interval.is_empty() {
            return Err(RegistrarError::InvalidInterval(format!(
                "start time {} equals end time {}",
                start.format("%H:%M"),
                end.format("%H:%M")
            )));
        }
        Ok(interval)
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.pieces()
            .any(|(start, end)| other.pieces().any(|(o_start, o_end)| start < o_end && o_start < end))
    }

    /// Non-empty, non-wrapping sub-ranges covering the interval.
    fn pieces(&self) -> impl Iterator<Item = (u16, u16)> {
        let pieces = if self.wraps_midnight() {
            [(self.start, MINUTES_PER_DAY), (0, self.end)]
        } else {
            [(self.start, self.end), (0, 0)]
        };
        pieces.into_iter().filter(|(start, end)| start < end)
    }
}

fn minute_of_day(time: NaiveTime) -> u16 {
    (time.hour() * 60 + time.minute()) as u16
}

/// Returns the first slot in `existing` that `candidate` would collide with.
///
/// The slot whose id equals `exclude_id` is skipped, which lets an update be
/// checked against everything except the row being replaced.
pub fn find_conflict<'a>(
    candidate: &NewTimeSlot,
    existing: &'a [TimeSlot],
    exclude_id: Option<Uuid>,
) -> Option<&'a TimeSlot> {
    let interval = candidate.interval();
    existing.iter().find(|slot| {
        Some(slot.id) != exclude_id
            && slot.day == candidate.day
            && (slot.room == candidate.room || slot.instructor_id == candidate.instructor_id)
            && interval.overlaps(&slot.interval())
    })
}

pub fn has_conflict(candidate: &NewTimeSlot, existing: &[TimeSlot], exclude_id: Option<Uuid>) -> bool {
    find_conflict(candidate, existing, exclude_id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn interval(start: (u32, u32), end: (u32, u32)) -> Interval {
        Interval::between(at(start.0, start.1), at(end.0, end.1))
    }

    #[test]
    fn seconds_are_ignored() {
        let start = NaiveTime::from_hms_opt(9, 0, 59).unwrap();
        let end = NaiveTime::from_hms_opt(9, 0, 1).unwrap();
        assert!(Interval::checked(start, end).is_err());
        assert_eq!(Interval::between(at(9, 30), at(10, 0)).start(), 570);
    }

    #[test]
    fn wrapping_interval_covers_midnight() {
        let late = interval((23, 0), (1, 0));
        assert!(late.wraps_midnight());
        assert!(late.overlaps(&interval((0, 0), (0, 15))));
        assert!(late.overlaps(&interval((23, 45), (23, 59))));
        assert!(!late.overlaps(&interval((1, 0), (2, 0))));
        assert!(!late.overlaps(&interval((22, 0), (23, 0))));
    }

    #[test]
    fn end_at_midnight_is_tail_only() {
        let evening = interval((22, 0), (0, 0));
        assert!(evening.wraps_midnight());
        assert!(evening.overlaps(&interval((23, 0), (23, 30))));
        assert!(!evening.overlaps(&interval((0, 0), (1, 0))));
    }

    #[test]
    fn empty_interval_overlaps_nothing() {
        let empty = interval((10, 0), (10, 0));
        assert!(empty.is_empty());
        assert!(!empty.overlaps(&interval((9, 0), (11, 0))));
        assert!(!interval((9, 0), (11, 0)).overlaps(&empty));
    }
}
