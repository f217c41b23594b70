use crate::models::{DbAttendance, DbAttendanceRow, DbStudent, DbStudentRow};
use eyre::Result;
use registrar_core::models::student::{AttendanceRequest, StudentRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// Student Repository

pub async fn list_students(pool: &Pool<Postgres>) -> Result<Vec<DbStudentRow>> {
    let students = sqlx::query_as::<_, DbStudentRow>(
        r#"
        SELECT s.id, s.first_name, s.last_name, s.enrollment_no, s.email, s.department_id,
               d.name AS department_name
        FROM students s
        LEFT JOIN departments d ON s.department_id = d.id
        ORDER BY s.enrollment_no ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(students)
}

pub async fn get_student_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbStudent>> {
    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        SELECT id, first_name, last_name, enrollment_no, email, department_id, created_at
        FROM students
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(student)
}

pub async fn create_student(pool: &Pool<Postgres>, request: &StudentRequest) -> Result<DbStudent> {
    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        INSERT INTO students (id, first_name, last_name, enrollment_no, email, department_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, first_name, last_name, enrollment_no, email, department_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.enrollment_no)
    .bind(&request.email)
    .bind(request.department_id)
    .fetch_one(pool)
    .await?;

    tracing::debug!(
        "Student created: id={}, enrollment_no={}",
        student.id,
        student.enrollment_no
    );
    Ok(student)
}

pub async fn update_student(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &StudentRequest,
) -> Result<Option<DbStudent>> {
    let student = sqlx::query_as::<_, DbStudent>(
        r#"
        UPDATE students
        SET first_name = $2, last_name = $3, enrollment_no = $4, email = $5, department_id = $6
        WHERE id = $1
        RETURNING id, first_name, last_name, enrollment_no, email, department_id, created_at
        "#,
    )
    .bind(id)
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.enrollment_no)
    .bind(&request.email)
    .bind(request.department_id)
    .fetch_optional(pool)
    .await?;

    Ok(student)
}

pub async fn delete_student(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM students WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Attendance Repository

pub async fn list_attendance(pool: &Pool<Postgres>) -> Result<Vec<DbAttendanceRow>> {
    let records = sqlx::query_as::<_, DbAttendanceRow>(
        r#"
        SELECT a.id, a.student_id,
               NULLIF(CONCAT_WS(' ', s.first_name, s.last_name), '') AS student_name,
               a.course_id, c.name AS course_name, a.attendance_date, a.status
        FROM attendance a
        LEFT JOIN students s ON a.student_id = s.id
        LEFT JOIN courses c ON a.course_id = c.id
        ORDER BY a.attendance_date DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(records)
}

pub async fn get_attendance_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAttendance>> {
    let record = sqlx::query_as::<_, DbAttendance>(
        r#"
        SELECT id, student_id, course_id, attendance_date, status, created_at
        FROM attendance
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

pub async fn create_attendance(
    pool: &Pool<Postgres>,
    request: &AttendanceRequest,
) -> Result<DbAttendance> {
    let record = sqlx::query_as::<_, DbAttendance>(
        r#"
        INSERT INTO attendance (id, student_id, course_id, attendance_date, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, student_id, course_id, attendance_date, status, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.student_id)
    .bind(request.course_id)
    .bind(request.attendance_date)
    .bind(request.status().as_str())
    .fetch_one(pool)
    .await?;

    Ok(record)
}

pub async fn update_attendance(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &AttendanceRequest,
) -> Result<Option<DbAttendance>> {
    let record = sqlx::query_as::<_, DbAttendance>(
        r#"
        UPDATE attendance
        SET student_id = $2, course_id = $3, attendance_date = $4, status = $5
        WHERE id = $1
        RETURNING id, student_id, course_id, attendance_date, status, created_at
        "#,
    )
    .bind(id)
    .bind(request.student_id)
    .bind(request.course_id)
    .bind(request.attendance_date)
    .bind(request.status().as_str())
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

pub async fn delete_attendance(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM attendance WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
