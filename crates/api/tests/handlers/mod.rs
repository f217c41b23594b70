mod calendar_test;
mod config_test;
mod course_test;
mod health_test;
mod middleware_test;
mod organization_test;
mod timetable_test;
