//! Attendance log rows and their derived values.
//!
//! Each clock-in creates one row keyed by employee and calendar day. The row
//! moves through three states over the day:
//!
//! ```text
//! NotClocked --clock in--> ClockedIn --clock out--> ClockedOut
//! ```
//!
//! Timestamps are kept at second precision in `YYYY-MM-DD HH:MM:SS` form.

use super::error::HrError;
use super::employee::EmployeeId;
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Where the employee worked from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum Location {
    HeadOffice,
    Remote,
    Other(String),
}

impl Location {
    pub const PRESETS: [Location; 2] = [Location::HeadOffice, Location::Remote];

    pub fn as_str(&self) -> &str {
        match self {
            Location::HeadOffice => "head-office",
            Location::Remote => "remote",
            Location::Other(text) => text,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "head-office" => Location::HeadOffice,
            "remote" => Location::Remote,
            other => Location::Other(other.to_string()),
        })
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.as_str().to_string()
    }
}

impl Default for Location {
    fn default() -> Self {
        Location::HeadOffice
    }
}

impl ToSql for Location {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Location {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Ok(text.parse().unwrap_or_else(|never: Infallible| match never {}))
    }
}

/// Attendance state of one employee on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceState {
    NotClocked,
    ClockedIn,
    ClockedOut,
}

impl AttendanceState {
    /// State implied by the most recent row of the day, if any.
    pub fn from_latest(latest: Option<&AttendanceLog>) -> Self {
        match latest {
            None => AttendanceState::NotClocked,
            Some(log) if log.clock_out.is_some() => AttendanceState::ClockedOut,
            Some(_) => AttendanceState::ClockedIn,
        }
    }
}

impl fmt::Display for AttendanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AttendanceState::NotClocked => "not clocked in",
            AttendanceState::ClockedIn => "clocked in",
            AttendanceState::ClockedOut => "clocked out",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceLog {
    pub id: i64,
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub clock_in: Option<NaiveDateTime>,
    pub clock_out: Option<NaiveDateTime>,
    pub location: Location,
}

impl AttendanceLog {
    /// Time between clock-in and clock-out, when both are recorded.
    pub fn worked(&self) -> Option<Duration> {
        match (self.clock_in, self.clock_out) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Worked hours rounded to two decimals; `0.0` while the row is incomplete.
    pub fn duration_hours(&self) -> f64 {
        self.worked().map(hours_from_duration).unwrap_or(0.0)
    }
}

/// Converts a duration to hours, rounded to two decimal places.
///
/// Exact ties go to the even digit: 8h 7m 30s is `8.12`, not `8.13`.
pub fn hours_from_duration(duration: Duration) -> f64 {
    let hours = duration.num_seconds() as f64 / 3600.0;
    (hours * 100.0).round_ties_even() / 100.0
}

/// Drops sub-second precision so stored timestamps match `TIMESTAMP_FORMAT`.
pub fn truncate_to_seconds(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}

pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, HrError> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map_err(|_| HrError::InvalidTimestamp(s.to_string()))
}
