//! Domain errors raised by the registry, attendance and vacation modules.
//!
//! Database failures are not wrapped here; they travel as `rusqlite::Error`
//! inside `anyhow::Error` and end the current command.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HrError {
    #[error("vacation end date {end} is before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("unknown position '{0}'")]
    UnknownPosition(String),

    #[error("unknown department '{0}'")]
    UnknownDepartment(String),

    #[error("unknown vacation type '{0}'")]
    UnknownVacationType(String),

    #[error("invalid timestamp '{0}', expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp(String),
}
