//! Attendance log storage: clock-in, clock-out and history queries.
//!
//! Rows are matched by `(employee_id, date)`. Clocking in twice on one day
//! inserts a second row, and clocking out then stamps every row of that day.

use super::db::Db;
use crate::libs::attendance::{format_timestamp, AttendanceLog, AttendanceState, Location};
use crate::libs::employee::EmployeeId;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Row};

const INSERT_CLOCK_IN: &str =
    "INSERT INTO attendance_logs (employee_id, date, clock_in, location) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_CLOCK_OUT: &str = "UPDATE attendance_logs SET clock_out = ?1 WHERE employee_id = ?2 AND date = ?3";
const SELECT_BY_DAY: &str = "SELECT id, employee_id, date, clock_in, clock_out, location FROM attendance_logs
    WHERE employee_id = ?1 AND date = ?2 ORDER BY id";
const SELECT_RECENT: &str = "SELECT id, employee_id, date, clock_in, clock_out, location FROM attendance_logs
    WHERE employee_id = ?1 ORDER BY date DESC, id DESC LIMIT ?2";
const SELECT_ALL: &str = "SELECT id, employee_id, date, clock_in, clock_out, location FROM attendance_logs ORDER BY id";

pub struct Attendance<'a> {
    db: &'a Db,
}

impl<'a> Attendance<'a> {
    pub fn new(db: &'a Db) -> Self {
        Attendance { db }
    }

    /// Records a clock-in on the calendar day of `timestamp`. Returns the new row id.
    pub fn clock_in(&self, employee_id: EmployeeId, location: &Location, timestamp: NaiveDateTime) -> Result<i64> {
        self.db.conn.execute(
            INSERT_CLOCK_IN,
            params![employee_id, timestamp.date(), format_timestamp(timestamp), location],
        )?;

        Ok(self.db.conn.last_insert_rowid())
    }

    /// Stamps `clock_out` on the employee's rows for the day of `timestamp`.
    ///
    /// Returns the number of rows touched; `0` when there was no clock-in that day.
    pub fn clock_out(&self, employee_id: EmployeeId, timestamp: NaiveDateTime) -> Result<usize> {
        let affected = self.db.conn.execute(
            UPDATE_CLOCK_OUT,
            params![format_timestamp(timestamp), employee_id, timestamp.date()],
        )?;

        Ok(affected)
    }

    pub fn for_day(&self, employee_id: EmployeeId, date: NaiveDate) -> Result<Vec<AttendanceLog>> {
        let mut stmt = self.db.conn.prepare(SELECT_BY_DAY)?;
        let logs = stmt
            .query_map(params![employee_id, date], map_log)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(logs)
    }

    pub fn state(&self, employee_id: EmployeeId, date: NaiveDate) -> Result<AttendanceState> {
        let logs = self.for_day(employee_id, date)?;

        Ok(AttendanceState::from_latest(logs.last()))
    }

    /// Up to `limit` rows for the employee, most recent date first.
    pub fn recent(&self, employee_id: EmployeeId, limit: usize) -> Result<Vec<AttendanceLog>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.db.conn.prepare(SELECT_RECENT)?;
        let logs = stmt
            .query_map(params![employee_id, limit], map_log)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(logs)
    }

    pub fn list(&self) -> Result<Vec<AttendanceLog>> {
        let mut stmt = self.db.conn.prepare(SELECT_ALL)?;
        let logs = stmt.query_map([], map_log)?.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(logs)
    }
}

fn map_log(row: &Row<'_>) -> rusqlite::Result<AttendanceLog> {
    Ok(AttendanceLog {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        date: row.get(2)?,
        clock_in: row.get(3)?,
        clock_out: row.get(4)?,
        location: row.get::<_, Option<Location>>(5)?.unwrap_or_default(),
    })
}
