//! Field checks shared by the request models.

use chrono::NaiveDate;

use crate::errors::{RegistrarError, RegistrarResult};

/// Trims `value` and rejects it when nothing is left.
pub fn required(field: &str, value: &str) -> RegistrarResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistrarError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

pub fn email(field: &str, value: &str) -> RegistrarResult<String> {
    let address = required(field, value)?;
    match address.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(address),
        _ => Err(RegistrarError::Validation(format!(
            "{field} must be an email address, got {address:?}"
        ))),
    }
}

pub fn year_range(start_year: i32, end_year: i32) -> RegistrarResult<()> {
    if end_year < start_year {
        return Err(RegistrarError::Validation(format!(
            "end_year {end_year} is before start_year {start_year}"
        )));
    }
    Ok(())
}

pub fn date_range(start: NaiveDate, end: NaiveDate) -> RegistrarResult<()> {
    if end < start {
        return Err(RegistrarError::Validation(format!(
            "end_date {end} is before start_date {start}"
        )));
    }
    Ok(())
}
