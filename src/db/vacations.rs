use super::db::Db;
use crate::libs::employee::EmployeeId;
use crate::libs::vacation::{Vacation, VacationRequest};
use anyhow::Result;
use rusqlite::{params, Row};

const INSERT_VACATION: &str = "INSERT INTO vacations (employee_id, vacation_type, start_date, end_date, days, reason)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_BY_EMPLOYEE: &str = "SELECT id, employee_id, vacation_type, start_date, end_date, days, reason
    FROM vacations WHERE employee_id = ?1 ORDER BY start_date DESC, id DESC";
const SELECT_ALL: &str =
    "SELECT id, employee_id, vacation_type, start_date, end_date, days, reason FROM vacations ORDER BY id";

pub struct Vacations<'a> {
    db: &'a Db,
}

impl<'a> Vacations<'a> {
    pub fn new(db: &'a Db) -> Self {
        Vacations { db }
    }

    /// Stores a validated request and returns the new row id.
    pub fn request(&self, request: &VacationRequest) -> Result<i64> {
        self.db.conn.execute(
            INSERT_VACATION,
            params![
                request.employee_id,
                request.vacation_type,
                request.start_date,
                request.end_date,
                request.days,
                request.reason
            ],
        )?;

        Ok(self.db.conn.last_insert_rowid())
    }

    /// Vacations of one employee, latest start date first.
    pub fn for_employee(&self, employee_id: EmployeeId) -> Result<Vec<Vacation>> {
        let mut stmt = self.db.conn.prepare(SELECT_BY_EMPLOYEE)?;
        let vacations = stmt.query_map([employee_id], map_vacation)?.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(vacations)
    }

    pub fn list(&self) -> Result<Vec<Vacation>> {
        let mut stmt = self.db.conn.prepare(SELECT_ALL)?;
        let vacations = stmt.query_map([], map_vacation)?.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(vacations)
    }
}

fn map_vacation(row: &Row<'_>) -> rusqlite::Result<Vacation> {
    Ok(Vacation {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        vacation_type: row.get(2)?,
        start_date: row.get(3)?,
        end_date: row.get(4)?,
        days: row.get(5)?,
        reason: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
    })
}
