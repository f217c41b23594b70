use crate::models::{
    DbCourse, DbCourseRow, DbEnrolledTeacher, DbEnrolledTeacherRow, DbEnrollment,
    DbEnrollmentRow, DbOfferedCourse, DbRosterRow,
};
use eyre::Result;
use registrar_core::models::course::{CourseRequest, EnrolledTeacherRequest, EnrollmentRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// Course Repository

pub async fn list_courses(pool: &Pool<Postgres>) -> Result<Vec<DbCourseRow>> {
    let courses = sqlx::query_as::<_, DbCourseRow>(
        r#"
        SELECT c.id, c.name, c.department_id, d.name AS department_name,
               c.faculty_id,
               NULLIF(CONCAT_WS(' ', f.first_name, f.last_name), '') AS faculty_name
        FROM courses c
        LEFT JOIN departments d ON c.department_id = d.id
        LEFT JOIN faculty f ON c.faculty_id = f.id
        ORDER BY c.name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(courses)
}

/// Courses with both a department and a teaching faculty member assigned.
pub async fn list_offered_courses(pool: &Pool<Postgres>) -> Result<Vec<DbOfferedCourse>> {
    let courses = sqlx::query_as::<_, DbOfferedCourse>(
        r#"
        SELECT c.id, c.name, d.name AS department_name,
               CONCAT(f.first_name, ' ', f.last_name) AS faculty_name
        FROM courses c
        JOIN departments d ON c.department_id = d.id
        JOIN faculty f ON c.faculty_id = f.id
        ORDER BY c.name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(courses)
}

pub async fn get_course_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbCourse>> {
    let course = sqlx::query_as::<_, DbCourse>(
        r#"
        SELECT id, name, department_id, faculty_id, created_at
        FROM courses
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(course)
}

pub async fn create_course(pool: &Pool<Postgres>, request: &CourseRequest) -> Result<DbCourse> {
    let course = sqlx::query_as::<_, DbCourse>(
        r#"
        INSERT INTO courses (id, name, department_id, faculty_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, department_id, faculty_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.name)
    .bind(request.department_id)
    .bind(request.faculty_id)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Course created: id={}, name={}", course.id, course.name);
    Ok(course)
}

pub async fn update_course(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &CourseRequest,
) -> Result<Option<DbCourse>> {
    let course = sqlx::query_as::<_, DbCourse>(
        r#"
        UPDATE courses
        SET name = $2, department_id = $3, faculty_id = $4
        WHERE id = $1
        RETURNING id, name, department_id, faculty_id, created_at
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .bind(request.department_id)
    .bind(request.faculty_id)
    .fetch_optional(pool)
    .await?;

    Ok(course)
}

pub async fn delete_course(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM courses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_course_roster(pool: &Pool<Postgres>, course_id: Uuid) -> Result<Vec<DbRosterRow>> {
    let students = sqlx::query_as::<_, DbRosterRow>(
        r#"
        SELECT DISTINCT s.id AS student_id, s.first_name, s.last_name, s.enrollment_no, s.email
        FROM enrollments e
        JOIN students s ON e.student_id = s.id
        WHERE e.course_id = $1
        ORDER BY s.last_name ASC, s.first_name ASC
        "#,
    )
    .bind(course_id)
    .fetch_all(pool)
    .await?;

    Ok(students)
}

// Enrollment Repository

pub async fn list_enrollments(pool: &Pool<Postgres>) -> Result<Vec<DbEnrollmentRow>> {
    let enrollments = sqlx::query_as::<_, DbEnrollmentRow>(
        r#"
        SELECT e.id, e.student_id, CONCAT(s.first_name, ' ', s.last_name) AS student_name,
               e.course_id, c.name AS course_name,
               e.semester_id, sem.name AS semester_name
        FROM enrollments e
        JOIN students s ON e.student_id = s.id
        JOIN courses c ON e.course_id = c.id
        JOIN semesters sem ON e.semester_id = sem.id
        ORDER BY e.created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(enrollments)
}

pub async fn create_enrollment(
    pool: &Pool<Postgres>,
    request: &EnrollmentRequest,
) -> Result<DbEnrollment> {
    let enrollment = sqlx::query_as::<_, DbEnrollment>(
        r#"
        INSERT INTO enrollments (id, student_id, course_id, semester_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, student_id, course_id, semester_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.student_id)
    .bind(request.course_id)
    .bind(request.semester_id)
    .fetch_one(pool)
    .await?;

    Ok(enrollment)
}

pub async fn delete_enrollment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Enrolled Teacher Repository

pub async fn list_enrolled_teachers(pool: &Pool<Postgres>) -> Result<Vec<DbEnrolledTeacherRow>> {
    let teachers = sqlx::query_as::<_, DbEnrolledTeacherRow>(
        r#"
        SELECT et.id, et.faculty_id, f.first_name, f.last_name,
               et.course_id, c.name AS course_name
        FROM enrolled_teachers et
        JOIN faculty f ON et.faculty_id = f.id
        JOIN courses c ON et.course_id = c.id
        ORDER BY c.name ASC, f.last_name ASC, f.first_name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(teachers)
}

pub async fn create_enrolled_teacher(
    pool: &Pool<Postgres>,
    request: &EnrolledTeacherRequest,
) -> Result<DbEnrolledTeacher> {
    let teacher = sqlx::query_as::<_, DbEnrolledTeacher>(
        r#"
        INSERT INTO enrolled_teachers (id, faculty_id, course_id)
        VALUES ($1, $2, $3)
        RETURNING id, faculty_id, course_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.faculty_id)
    .bind(request.course_id)
    .fetch_one(pool)
    .await?;

    Ok(teacher)
}

pub async fn delete_enrolled_teacher(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM enrolled_teachers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
