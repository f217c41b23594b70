//! Postgres-backed unit of work for the timetable workflows.

use async_trait::async_trait;
use eyre::Result;
use registrar_core::models::timetable::{DayOfWeek, NewTimeSlot, TimeSlot};
use registrar_core::scheduling::TimetableStore;
use sqlx::{PgConnection, Pool, Postgres, Transaction};
use uuid::Uuid;

use crate::repositories::timetable;

/// Runs timetable reads and writes inside one transaction.
///
/// The transaction starts on first storage access, so a request rejected
/// during validation never takes a connection. Reading a day's slots takes a
/// transaction-scoped advisory lock for that day; a concurrent create or
/// update for the same day waits until this store is committed or dropped.
pub struct PgTimetableStore {
    pool: Pool<Postgres>,
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgTimetableStore {
    pub fn new(pool: &Pool<Postgres>) -> Self {
        Self {
            pool: pool.clone(),
            tx: None,
        }
    }

    async fn connection(&mut self) -> Result<&mut PgConnection> {
        let tx = match self.tx.take() {
            Some(tx) => tx,
            None => self.pool.begin().await?,
        };
        Ok(&mut **self.tx.insert(tx))
    }

    /// Commits the work done so far. A store that never touched storage has
    /// nothing to commit.
    pub async fn commit(self) -> Result<()> {
        if let Some(tx) = self.tx {
            tx.commit().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl TimetableStore for PgTimetableStore {
    async fn slots_on_day(&mut self, day: DayOfWeek) -> Result<Vec<TimeSlot>> {
        let conn = self.connection().await?;
        timetable::lock_day(&mut *conn, day).await?;

        timetable::time_slots_on_day(&mut *conn, day)
            .await?
            .into_iter()
            .map(TimeSlot::try_from)
            .collect()
    }

    async fn slot_by_id(&mut self, id: Uuid) -> Result<Option<TimeSlot>> {
        let conn = self.connection().await?;
        timetable::get_time_slot_by_id(conn, id)
            .await?
            .map(TimeSlot::try_from)
            .transpose()
    }

    async fn insert_slot(&mut self, slot: &NewTimeSlot) -> Result<TimeSlot> {
        let conn = self.connection().await?;
        let created = timetable::create_time_slot(conn, slot).await?;
        TimeSlot::try_from(created)
    }

    async fn update_slot(&mut self, id: Uuid, slot: &NewTimeSlot) -> Result<Option<TimeSlot>> {
        let conn = self.connection().await?;
        timetable::update_time_slot(conn, id, slot)
            .await?
            .map(TimeSlot::try_from)
            .transpose()
    }
}
