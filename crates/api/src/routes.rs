pub mod assignment;
pub mod calendar;
pub mod course;
pub mod health;
pub mod organization;
pub mod student;
pub mod timetable;
