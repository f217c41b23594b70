pub mod assignment;
pub mod calendar;
pub mod course;
pub mod organization;
pub mod student;
pub mod timetable;

use registrar_core::errors::RegistrarError;
use registrar_db::repositories::dependents::{referencing_tables, Reference};
use sqlx::PgPool;
use uuid::Uuid;

use crate::middleware::error_handling::AppError;

/// Refuses a delete while other records still point at `id`.
pub(crate) async fn ensure_unreferenced(
    pool: &PgPool,
    entity: &str,
    references: &[Reference],
    id: Uuid,
) -> Result<(), AppError> {
    let dependents = referencing_tables(pool, references, id)
        .await
        .map_err(RegistrarError::Database)?;

    if dependents.is_empty() {
        return Ok(());
    }

    tracing::info!(%id, entity, ?dependents, "Delete refused");
    Err(RegistrarError::DependentRecordsExist {
        entity: entity.to_string(),
        dependents,
    }
    .into())
}

pub(crate) fn not_found(entity: &str, id: Uuid) -> RegistrarError {
    RegistrarError::NotFound(format!("{entity} with ID {id} not found"))
}
