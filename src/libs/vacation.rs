//! Vacation requests.
//!
//! A request covers an inclusive date range: a vacation starting and ending on
//! the same day counts as one day.

use super::employee::EmployeeId;
use super::error::HrError;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VacationType {
    Annual,
    Sick,
    /// Bereavement, weddings and other family occasions.
    BereavementOrFamily,
    Other,
}

impl VacationType {
    pub const ALL: [VacationType; 4] = [
        VacationType::Annual,
        VacationType::Sick,
        VacationType::BereavementOrFamily,
        VacationType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VacationType::Annual => "annual",
            VacationType::Sick => "sick",
            VacationType::BereavementOrFamily => "bereavement-or-family",
            VacationType::Other => "other",
        }
    }
}

impl fmt::Display for VacationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VacationType {
    type Err = HrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VacationType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| HrError::UnknownVacationType(s.to_string()))
    }
}

impl ToSql for VacationType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for VacationType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: HrError| FromSqlError::Other(Box::new(e)))
    }
}

/// A validated vacation request, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct VacationRequest {
    pub employee_id: EmployeeId,
    pub vacation_type: VacationType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub reason: String,
}

impl VacationRequest {
    /// Builds a request and computes its inclusive day count.
    ///
    /// Fails with [`HrError::InvalidDateRange`] when `end_date` precedes `start_date`.
    pub fn new(
        employee_id: EmployeeId,
        vacation_type: VacationType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: &str,
    ) -> Result<Self, HrError> {
        let days = vacation_days(start_date, end_date)?;
        Ok(VacationRequest {
            employee_id,
            vacation_type,
            start_date,
            end_date,
            days,
            reason: reason.to_string(),
        })
    }
}

/// A stored vacation row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vacation {
    pub id: i64,
    pub employee_id: EmployeeId,
    pub vacation_type: VacationType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub reason: String,
}

/// Inclusive number of calendar days between `start` and `end`.
pub fn vacation_days(start: NaiveDate, end: NaiveDate) -> Result<i64, HrError> {
    if end < start {
        return Err(HrError::InvalidDateRange { start, end });
    }
    Ok((end - start).num_days() + 1)
}

pub fn total_days(vacations: &[Vacation]) -> i64 {
    vacations.iter().map(|v| v.days).sum()
}
