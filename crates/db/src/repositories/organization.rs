use crate::models::{DbDepartment, DbFaculty, DbFacultyRow};
use eyre::Result;
use registrar_core::models::organization::{DepartmentRequest, FacultyRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// Department Repository

pub async fn list_departments(pool: &Pool<Postgres>) -> Result<Vec<DbDepartment>> {
    let departments = sqlx::query_as::<_, DbDepartment>(
        r#"
        SELECT id, name, created_at
        FROM departments
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(departments)
}

pub async fn get_department_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbDepartment>> {
    let department = sqlx::query_as::<_, DbDepartment>(
        r#"
        SELECT id, name, created_at
        FROM departments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(department)
}

pub async fn create_department(
    pool: &Pool<Postgres>,
    request: &DepartmentRequest,
) -> Result<DbDepartment> {
    let department = sqlx::query_as::<_, DbDepartment>(
        r#"
        INSERT INTO departments (id, name)
        VALUES ($1, $2)
        RETURNING id, name, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.name)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Department created: id={}", department.id);
    Ok(department)
}

pub async fn update_department(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &DepartmentRequest,
) -> Result<Option<DbDepartment>> {
    let department = sqlx::query_as::<_, DbDepartment>(
        r#"
        UPDATE departments
        SET name = $2
        WHERE id = $1
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .fetch_optional(pool)
    .await?;

    Ok(department)
}

pub async fn delete_department(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM departments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Faculty Repository

pub async fn list_faculty(pool: &Pool<Postgres>) -> Result<Vec<DbFacultyRow>> {
    let faculty = sqlx::query_as::<_, DbFacultyRow>(
        r#"
        SELECT f.id, f.first_name, f.last_name, f.email, f.department_id,
               d.name AS department_name
        FROM faculty f
        LEFT JOIN departments d ON f.department_id = d.id
        ORDER BY f.last_name ASC, f.first_name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(faculty)
}

pub async fn get_faculty_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbFaculty>> {
    let faculty = sqlx::query_as::<_, DbFaculty>(
        r#"
        SELECT id, first_name, last_name, email, department_id, created_at
        FROM faculty
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(faculty)
}

pub async fn create_faculty(pool: &Pool<Postgres>, request: &FacultyRequest) -> Result<DbFaculty> {
    let faculty = sqlx::query_as::<_, DbFaculty>(
        r#"
        INSERT INTO faculty (id, first_name, last_name, email, department_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, first_name, last_name, email, department_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(request.department_id)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Faculty member created: id={}", faculty.id);
    Ok(faculty)
}

pub async fn update_faculty(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &FacultyRequest,
) -> Result<Option<DbFaculty>> {
    let faculty = sqlx::query_as::<_, DbFaculty>(
        r#"
        UPDATE faculty
        SET first_name = $2, last_name = $3, email = $4, department_id = $5
        WHERE id = $1
        RETURNING id, first_name, last_name, email, department_id, created_at
        "#,
    )
    .bind(id)
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(request.department_id)
    .fetch_optional(pool)
    .await?;

    Ok(faculty)
}

pub async fn delete_faculty(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM faculty WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
