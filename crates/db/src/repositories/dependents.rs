//! Foreign-key references that block a delete.

use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// A column in another table that points at the record being deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub table: &'static str,
    pub column: &'static str,
}

const fn reference(table: &'static str, column: &'static str) -> Reference {
    Reference { table, column }
}

pub const DEPARTMENT_REFERENCES: &[Reference] = &[
    reference("faculty", "department_id"),
    reference("courses", "department_id"),
    reference("students", "department_id"),
];

pub const FACULTY_REFERENCES: &[Reference] = &[
    reference("courses", "faculty_id"),
    reference("timetables", "instructor_id"),
    reference("enrolled_teachers", "faculty_id"),
];

pub const COURSE_REFERENCES: &[Reference] = &[
    reference("enrollments", "course_id"),
    reference("timetables", "course_id"),
    reference("attendance", "course_id"),
    reference("course_assignments", "course_id"),
    reference("enrolled_teachers", "course_id"),
];

pub const STUDENT_REFERENCES: &[Reference] = &[
    reference("enrollments", "student_id"),
    reference("attendance", "student_id"),
    reference("course_assignments", "student_id"),
];

pub const SEMESTER_REFERENCES: &[Reference] = &[
    reference("enrollments", "semester_id"),
    reference("current_semesters", "semester_id"),
];

pub const SESSION_REFERENCES: &[Reference] = &[
    reference("programs", "session_id"),
    reference("course_assignments", "session_id"),
];

pub const PROGRAM_REFERENCES: &[Reference] = &[
    reference("current_semesters", "program_id"),
    reference("course_assignments", "program_id"),
];

pub const CURRENT_SEMESTER_REFERENCES: &[Reference] =
    &[reference("course_assignments", "current_semester_id")];

/// Returns the tables in `references` that still hold a row pointing at `id`.
pub async fn referencing_tables(
    pool: &Pool<Postgres>,
    references: &[Reference],
    id: Uuid,
) -> Result<Vec<String>> {
    let mut found = Vec::new();

    for reference in references {
        // Table and column names come from the constants above, never from input.
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE {} = $1)",
            reference.table, reference.column
        );
        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(id)
            .fetch_one(pool)
            .await?;

        if exists {
            found.push(reference.table.to_string());
        }
    }

    tracing::debug!(%id, ?found, "Checked dependent records");
    Ok(found)
}
