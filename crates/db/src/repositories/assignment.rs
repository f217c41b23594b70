use crate::models::{DbCourseAssignment, DbCourseAssignmentRow};
use eyre::Result;
use registrar_core::models::assignment::{AssignmentFilter, CourseAssignmentRequest};
use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

const ASSIGNMENT_LISTING: &str = r#"
    SELECT a.id, s.first_name, s.last_name, p.name AS program_name,
           se.start_year, se.end_year, sem.name AS semester_name, c.name AS course_name
    FROM course_assignments a
    JOIN students s ON a.student_id = s.id
    JOIN programs p ON a.program_id = p.id
    JOIN sessions se ON a.session_id = se.id
    JOIN current_semesters cs ON a.current_semester_id = cs.id
    JOIN semesters sem ON cs.semester_id = sem.id
    JOIN courses c ON a.course_id = c.id
"#;

/// Builds the listing query, narrowed by every filter field that is set.
fn listing_query(filter: &AssignmentFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(ASSIGNMENT_LISTING);

    if !filter.is_empty() {
        query.push(" WHERE ");
        let mut conditions = query.separated(" AND ");
        for (column, value) in [
            ("a.program_id", filter.program_id),
            ("a.session_id", filter.session_id),
            ("a.current_semester_id", filter.current_semester_id),
        ] {
            if let Some(id) = value {
                conditions.push(column);
                conditions.push_unseparated(" = ");
                conditions.push_bind_unseparated(id);
            }
        }
    }

    query.push(" ORDER BY s.last_name ASC, s.first_name ASC, c.name ASC");
    query
}

pub async fn list_course_assignments(
    pool: &Pool<Postgres>,
    filter: &AssignmentFilter,
) -> Result<Vec<DbCourseAssignmentRow>> {
    let assignments = listing_query(filter)
        .build_query_as::<DbCourseAssignmentRow>()
        .fetch_all(pool)
        .await?;

    Ok(assignments)
}

pub async fn create_course_assignment(
    pool: &Pool<Postgres>,
    request: &CourseAssignmentRequest,
    session_id: Uuid,
) -> Result<DbCourseAssignment> {
    let assignment = sqlx::query_as::<_, DbCourseAssignment>(
        r#"
        INSERT INTO course_assignments
            (id, student_id, program_id, session_id, current_semester_id, course_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, student_id, program_id, session_id, current_semester_id, course_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.student_id)
    .bind(request.program_id)
    .bind(session_id)
    .bind(request.current_semester_id)
    .bind(request.course_id)
    .fetch_one(pool)
    .await?;

    Ok(assignment)
}

pub async fn delete_course_assignment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM course_assignments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
