use crate::models::{
    DbCurrentSemester, DbCurrentSemesterRow, DbProgram, DbProgramRow, DbSemester, DbSession,
};
use eyre::Result;
use registrar_core::models::calendar::{
    CurrentSemesterRequest, ProgramRequest, SemesterRequest, SessionRequest,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

// Semester Repository

pub async fn list_semesters(pool: &Pool<Postgres>) -> Result<Vec<DbSemester>> {
    let semesters = sqlx::query_as::<_, DbSemester>(
        r#"
        SELECT id, name, created_at
        FROM semesters
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(semesters)
}

pub async fn get_semester_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSemester>> {
    let semester = sqlx::query_as::<_, DbSemester>(
        r#"
        SELECT id, name, created_at
        FROM semesters
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(semester)
}

pub async fn create_semester(
    pool: &Pool<Postgres>,
    request: &SemesterRequest,
) -> Result<DbSemester> {
    let semester = sqlx::query_as::<_, DbSemester>(
        r#"
        INSERT INTO semesters (id, name)
        VALUES ($1, $2)
        RETURNING id, name, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.name)
    .fetch_one(pool)
    .await?;

    Ok(semester)
}

pub async fn update_semester(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &SemesterRequest,
) -> Result<Option<DbSemester>> {
    let semester = sqlx::query_as::<_, DbSemester>(
        r#"
        UPDATE semesters
        SET name = $2
        WHERE id = $1
        RETURNING id, name, created_at
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .fetch_optional(pool)
    .await?;

    Ok(semester)
}

pub async fn delete_semester(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM semesters WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Session Repository

pub async fn list_sessions(pool: &Pool<Postgres>) -> Result<Vec<DbSession>> {
    let sessions = sqlx::query_as::<_, DbSession>(
        r#"
        SELECT id, start_year, end_year, created_at
        FROM sessions
        ORDER BY start_year DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(sessions)
}

pub async fn get_session_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSession>> {
    let session = sqlx::query_as::<_, DbSession>(
        r#"
        SELECT id, start_year, end_year, created_at
        FROM sessions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

pub async fn create_session(pool: &Pool<Postgres>, request: &SessionRequest) -> Result<DbSession> {
    let session = sqlx::query_as::<_, DbSession>(
        r#"
        INSERT INTO sessions (id, start_year, end_year)
        VALUES ($1, $2, $3)
        RETURNING id, start_year, end_year, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.start_year)
    .bind(request.end_year)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

pub async fn update_session(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &SessionRequest,
) -> Result<Option<DbSession>> {
    let session = sqlx::query_as::<_, DbSession>(
        r#"
        UPDATE sessions
        SET start_year = $2, end_year = $3
        WHERE id = $1
        RETURNING id, start_year, end_year, created_at
        "#,
    )
    .bind(id)
    .bind(request.start_year)
    .bind(request.end_year)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

pub async fn delete_session(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Program Repository

pub async fn list_programs(pool: &Pool<Postgres>) -> Result<Vec<DbProgramRow>> {
    let programs = sqlx::query_as::<_, DbProgramRow>(
        r#"
        SELECT p.id, p.name, p.session_id, s.start_year, s.end_year
        FROM programs p
        JOIN sessions s ON p.session_id = s.id
        ORDER BY s.start_year DESC, p.name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(programs)
}

pub async fn get_program_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbProgram>> {
    let program = sqlx::query_as::<_, DbProgram>(
        r#"
        SELECT id, name, session_id, created_at
        FROM programs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(program)
}

pub async fn create_program(pool: &Pool<Postgres>, request: &ProgramRequest) -> Result<DbProgram> {
    let program = sqlx::query_as::<_, DbProgram>(
        r#"
        INSERT INTO programs (id, name, session_id)
        VALUES ($1, $2, $3)
        RETURNING id, name, session_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.name)
    .bind(request.session_id)
    .fetch_one(pool)
    .await?;

    Ok(program)
}

pub async fn update_program(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &ProgramRequest,
) -> Result<Option<DbProgram>> {
    let program = sqlx::query_as::<_, DbProgram>(
        r#"
        UPDATE programs
        SET name = $2, session_id = $3
        WHERE id = $1
        RETURNING id, name, session_id, created_at
        "#,
    )
    .bind(id)
    .bind(&request.name)
    .bind(request.session_id)
    .fetch_optional(pool)
    .await?;

    Ok(program)
}

pub async fn delete_program(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM programs WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

// Current Semester Repository

pub async fn list_current_semesters(pool: &Pool<Postgres>) -> Result<Vec<DbCurrentSemesterRow>> {
    let current = sqlx::query_as::<_, DbCurrentSemesterRow>(
        r#"
        SELECT cs.id, cs.program_id, p.name AS program_name,
               cs.semester_id, s.name AS semester_name, cs.start_date, cs.end_date
        FROM current_semesters cs
        JOIN programs p ON cs.program_id = p.id
        JOIN semesters s ON cs.semester_id = s.id
        ORDER BY cs.start_date DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(current)
}

pub async fn get_current_semester_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbCurrentSemester>> {
    let current = sqlx::query_as::<_, DbCurrentSemester>(
        r#"
        SELECT id, program_id, semester_id, start_date, end_date, created_at
        FROM current_semesters
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(current)
}

pub async fn create_current_semester(
    pool: &Pool<Postgres>,
    request: &CurrentSemesterRequest,
) -> Result<DbCurrentSemester> {
    let current = sqlx::query_as::<_, DbCurrentSemester>(
        r#"
        INSERT INTO current_semesters (id, program_id, semester_id, start_date, end_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, program_id, semester_id, start_date, end_date, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.program_id)
    .bind(request.semester_id)
    .bind(request.start_date)
    .bind(request.end_date)
    .fetch_one(pool)
    .await?;

    Ok(current)
}

pub async fn delete_current_semester(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM current_semesters WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
