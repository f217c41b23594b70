use crate::models::{DbTimeSlot, DbTimeSlotRow};
use eyre::Result;
use registrar_core::models::timetable::{DayOfWeek, NewTimeSlot};
use sqlx::postgres::PgExecutor;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Advisory lock namespace for timetable writes; the day's ordinal is added.
const DAY_LOCK_BASE: i64 = 0x7469_6d65_7461_0000;

pub fn day_lock_key(day: DayOfWeek) -> i64 {
    DAY_LOCK_BASE + day.ordinal()
}

/// Blocks until no other transaction holds the timetable lock for `day`.
/// The lock is released when the surrounding transaction ends.
pub async fn lock_day<'c, E>(executor: E, day: DayOfWeek) -> Result<()>
where
    E: PgExecutor<'c>,
{
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(day_lock_key(day))
        .execute(executor)
        .await?;

    Ok(())
}

pub async fn list_time_slots(
    pool: &Pool<Postgres>,
    day: Option<DayOfWeek>,
) -> Result<Vec<DbTimeSlotRow>> {
    let slots = sqlx::query_as::<_, DbTimeSlotRow>(
        r#"
        SELECT t.id, t.course_id, c.name AS course_name, t.day_of_week,
               t.start_time, t.end_time, t.room, t.instructor_id,
               NULLIF(CONCAT_WS(' ', f.first_name, f.last_name), '') AS instructor_name
        FROM timetables t
        LEFT JOIN courses c ON t.course_id = c.id
        LEFT JOIN faculty f ON t.instructor_id = f.id
        WHERE ($1::text IS NULL OR t.day_of_week = $1)
        ORDER BY array_position(
                     ARRAY['Monday', 'Tuesday', 'Wednesday', 'Thursday', 'Friday', 'Saturday', 'Sunday'],
                     t.day_of_week::text
                 ),
                 t.start_time ASC
        "#,
    )
    .bind(day.map(|day| day.as_str()))
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn time_slots_on_day<'c, E>(executor: E, day: DayOfWeek) -> Result<Vec<DbTimeSlot>>
where
    E: PgExecutor<'c>,
{
    let slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, course_id, day_of_week, start_time, end_time, room, instructor_id, created_at
        FROM timetables
        WHERE day_of_week = $1
        ORDER BY start_time ASC
        "#,
    )
    .bind(day.as_str())
    .fetch_all(executor)
    .await?;

    Ok(slots)
}

pub async fn get_time_slot_by_id<'c, E>(executor: E, id: Uuid) -> Result<Option<DbTimeSlot>>
where
    E: PgExecutor<'c>,
{
    let slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, course_id, day_of_week, start_time, end_time, room, instructor_id, created_at
        FROM timetables
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(slot)
}

pub async fn create_time_slot<'c, E>(executor: E, slot: &NewTimeSlot) -> Result<DbTimeSlot>
where
    E: PgExecutor<'c>,
{
    let created = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        INSERT INTO timetables (id, course_id, day_of_week, start_time, end_time, room, instructor_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, course_id, day_of_week, start_time, end_time, room, instructor_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(slot.course_id)
    .bind(slot.day.as_str())
    .bind(slot.start_time)
    .bind(slot.end_time)
    .bind(&slot.room)
    .bind(slot.instructor_id)
    .fetch_one(executor)
    .await?;

    Ok(created)
}

pub async fn update_time_slot<'c, E>(
    executor: E,
    id: Uuid,
    slot: &NewTimeSlot,
) -> Result<Option<DbTimeSlot>>
where
    E: PgExecutor<'c>,
{
    let updated = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        UPDATE timetables
        SET course_id = $2, day_of_week = $3, start_time = $4, end_time = $5,
            room = $6, instructor_id = $7
        WHERE id = $1
        RETURNING id, course_id, day_of_week, start_time, end_time, room, instructor_id, created_at
        "#,
    )
    .bind(id)
    .bind(slot.course_id)
    .bind(slot.day.as_str())
    .bind(slot.start_time)
    .bind(slot.end_time)
    .bind(&slot.room)
    .bind(slot.instructor_id)
    .fetch_optional(executor)
    .await?;

    Ok(updated)
}

pub async fn delete_time_slot(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM timetables WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_day_has_its_own_lock() {
        let keys: HashSet<i64> = DayOfWeek::ALL.iter().map(|day| day_lock_key(*day)).collect();
        assert_eq!(keys.len(), DayOfWeek::ALL.len());
        assert!(keys.iter().all(|key| *key > 0));
    }
}
