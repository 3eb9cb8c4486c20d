use chrono::NaiveDate;

use crate::error::AppError;

pub mod activities;
pub mod completions;
pub mod health;
pub mod journal;
pub mod overrides;
pub mod profile;
pub mod schedule;
pub mod sync;
pub mod tips;

/// Parses a `YYYY-MM-DD` path segment, mapping failures to a 400.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    raw.parse().map_err(|_| {
        AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", raw))
    })
}
