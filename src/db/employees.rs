//! Employee registry storage.
//!
//! Updates and deletes report the number of affected rows; an unknown id is
//! simply `0`, never an error. Deleting an employee leaves their attendance
//! and vacation rows in place.

use super::db::Db;
use crate::libs::employee::{Employee, EmployeeId, NewEmployee};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};

const INSERT_EMPLOYEE: &str =
    "INSERT INTO employees (name, position, department, join_date, email) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_EMPLOYEES: &str = "SELECT id, name, position, department, join_date, email FROM employees ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, position, department, join_date, email FROM employees WHERE id = ?1";
const UPDATE_EMPLOYEE: &str =
    "UPDATE employees SET name = ?1, position = ?2, department = ?3, join_date = ?4, email = ?5 WHERE id = ?6";
const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";

pub struct Employees<'a> {
    db: &'a Db,
}

impl<'a> Employees<'a> {
    pub fn new(db: &'a Db) -> Self {
        Employees { db }
    }

    /// Inserts a new employee and returns its id.
    pub fn register(&self, employee: &NewEmployee) -> Result<EmployeeId> {
        self.db.conn.execute(
            INSERT_EMPLOYEE,
            params![
                employee.name,
                employee.position,
                employee.department,
                employee.join_date,
                employee.email
            ],
        )?;

        Ok(self.db.conn.last_insert_rowid())
    }

    /// All employees in registration order.
    pub fn list(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.db.conn.prepare(SELECT_EMPLOYEES)?;
        let employees = stmt.query_map([], map_employee)?.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(employees)
    }

    pub fn get(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let employee = self.db.conn.query_row(SELECT_BY_ID, [id], map_employee).optional()?;

        Ok(employee)
    }

    /// Overwrites every mutable field of employee `id`.
    pub fn update(&self, id: EmployeeId, employee: &NewEmployee) -> Result<usize> {
        let affected = self.db.conn.execute(
            UPDATE_EMPLOYEE,
            params![
                employee.name,
                employee.position,
                employee.department,
                employee.join_date,
                employee.email,
                id
            ],
        )?;

        Ok(affected)
    }

    pub fn delete(&self, id: EmployeeId) -> Result<usize> {
        let affected = self.db.conn.execute(DELETE_EMPLOYEE, [id])?;

        Ok(affected)
    }
}

fn map_employee(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        department: row.get(3)?,
        join_date: row.get(4)?,
        email: row.get(5)?,
    })
}
