//! Work-hours aggregation over recent attendance rows.
//!
//! The windows are row counts over a most-recent-first sequence, not calendar
//! spans: "last 7 days" sums the seven most recent attendance rows, even when
//! the employee has gaps and those rows cover more than a week.

use super::attendance::AttendanceLog;
use super::employee::EmployeeId;
use crate::db::attendance::Attendance;
use anyhow::Result;
use serde::Serialize;

pub const DEFAULT_RECENT_LIMIT: usize = 30;
pub const WEEK_WINDOW: usize = 7;
pub const MONTH_WINDOW: usize = 30;

/// Most recent attendance rows of an employee, newest date first.
pub fn recent_logs(attendance: &Attendance, employee_id: EmployeeId, limit: usize) -> Result<Vec<AttendanceLog>> {
    attendance.recent(employee_id, limit)
}

/// Sum of `duration_hours` over the first `window` rows.
pub fn sum_hours(logs: &[AttendanceLog], window: usize) -> f64 {
    logs.iter().take(window).map(AttendanceLog::duration_hours).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkHoursSummary {
    pub last_7: f64,
    pub last_30: f64,
}

impl WorkHoursSummary {
    pub fn from_logs(logs: &[AttendanceLog]) -> Self {
        WorkHoursSummary {
            last_7: sum_hours(logs, WEEK_WINDOW),
            last_30: sum_hours(logs, MONTH_WINDOW),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::attendance::Location;
    use chrono::{Duration, NaiveDate};

    fn rows(hours: &[i64]) -> Vec<AttendanceLog> {
        let newest = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        hours
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let date = newest - Duration::days(i as i64);
                let start = date.and_hms_opt(9, 0, 0).unwrap();
                AttendanceLog {
                    id: (hours.len() - i) as i64,
                    employee_id: 1,
                    date,
                    clock_in: Some(start),
                    clock_out: Some(start + Duration::hours(*h)),
                    location: Location::HeadOffice,
                }
            })
            .collect()
    }

    #[test]
    fn week_window_takes_first_seven_rows() {
        let logs = rows(&[8, 8, 8, 8, 8, 8, 8, 1, 1, 1]);
        assert_eq!(sum_hours(&logs, WEEK_WINDOW), 56.0);
        assert_eq!(sum_hours(&logs, MONTH_WINDOW), 59.0);
    }

    #[test]
    fn window_larger_than_rows_sums_everything() {
        let logs = rows(&[9, 9]);
        let summary = WorkHoursSummary::from_logs(&logs);
        assert_eq!(summary.last_7, 18.0);
        assert_eq!(summary.last_30, 18.0);
    }

    #[test]
    fn open_rows_contribute_nothing() {
        let mut logs = rows(&[8, 8]);
        logs[0].clock_out = None;
        assert_eq!(sum_hours(&logs, WEEK_WINDOW), 8.0);
    }

    #[test]
    fn empty_history_is_zero() {
        assert_eq!(WorkHoursSummary::from_logs(&[]), WorkHoursSummary { last_7: 0.0, last_30: 0.0 });
    }
}
