use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error(
        "Schedule conflict: time slot overlaps timetable entry {conflicting_id} for the same instructor or room"
    )]
    ScheduleConflict { conflicting_id: Uuid },

    #[error("Cannot delete {entity}: it is still referenced by {}", .dependents.join(", "))]
    DependentRecordsExist {
        entity: String,
        dependents: Vec<String>,
    },

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl RegistrarError {
    /// Stable machine-readable name of the variant, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistrarError::NotFound(_) => "not_found",
            RegistrarError::Validation(_) => "validation",
            RegistrarError::InvalidInterval(_) => "invalid_interval",
            RegistrarError::ScheduleConflict { .. } => "schedule_conflict",
            RegistrarError::DependentRecordsExist { .. } => "dependent_records_exist",
            RegistrarError::Database(_) => "database",
            RegistrarError::Internal(_) => "internal",
        }
    }
}

pub type RegistrarResult<T> = Result<T, RegistrarError>;
