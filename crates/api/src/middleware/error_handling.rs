//! # Error Handling Middleware
//!
//! Maps `RegistrarError` to HTTP status codes and a JSON body of the form
//! `{ "error": <message>, "kind": <variant> }`, so every handler reports
//! failures the same way.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use registrar_core::errors::RegistrarError;
use serde_json::json;
use tracing::error;

const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps `RegistrarError` and implements `IntoResponse`.
///
/// # Example
///
/// ```
/// use axum::Json;
/// use registrar_api::middleware::error_handling::AppError;
/// use registrar_core::errors::RegistrarError;
///
/// async fn handler(name: String) -> Result<Json<String>, AppError> {
///     if name.trim().is_empty() {
///         return Err(RegistrarError::Validation("name must not be empty".into()).into());
///     }
///     Ok(Json(name))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub RegistrarError);

pub fn status_for(err: &RegistrarError) -> StatusCode {
    match err {
        RegistrarError::NotFound(_) => StatusCode::NOT_FOUND,
        RegistrarError::Validation(_)
        | RegistrarError::InvalidInterval(_)
        | RegistrarError::ScheduleConflict { .. }
        | RegistrarError::DependentRecordsExist { .. } => StatusCode::BAD_REQUEST,
        RegistrarError::Database(_) | RegistrarError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            error!(error = ?self.0, "Request failed");
        }

        let body = Json(json!({
            "error": self.0.to_string(),
            "kind": self.0.kind(),
        }));

        (status, body).into_response()
    }
}

/// Reclassifies storage failures caused by the request itself.
///
/// A foreign key violation means the request named a record that does not
/// exist; a unique violation means it duplicates one that does.
fn classify(err: RegistrarError) -> RegistrarError {
    let RegistrarError::Database(report) = &err else {
        return err;
    };

    let code = report
        .downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|e| e.code())
        .map(|code| code.into_owned());

    match code.as_deref() {
        Some(FOREIGN_KEY_VIOLATION) => {
            RegistrarError::Validation("Referenced record does not exist".to_string())
        }
        Some(UNIQUE_VIOLATION) => {
            RegistrarError::Validation("A record with the same values already exists".to_string())
        }
        _ => err,
    }
}

impl From<RegistrarError> for AppError {
    fn from(err: RegistrarError) -> Self {
        AppError(classify(err))
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError::from(RegistrarError::Database(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(RegistrarError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(RegistrarError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(RegistrarError::Validation(rejection.body_text()))
    }
}

pub fn map_error(err: RegistrarError) -> Response {
    AppError::from(err).into_response()
}
