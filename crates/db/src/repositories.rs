pub mod assignment;
pub mod calendar;
pub mod course;
pub mod dependents;
pub mod organization;
pub mod student;
pub mod timetable;
