use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "employee.db";

/// Base tables, created on every open.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    position TEXT,
    department TEXT,
    join_date TEXT,
    email TEXT
);
CREATE TABLE IF NOT EXISTS attendance_logs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id INTEGER,
    date TEXT,
    clock_in TEXT,
    clock_out TEXT,
    location TEXT
);
CREATE TABLE IF NOT EXISTS vacations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id INTEGER,
    vacation_type TEXT,
    start_date TEXT,
    end_date TEXT,
    days INTEGER,
    reason TEXT
);";

/// The process-wide database handle.
///
/// Opened once by the command being run and lent to `Employees`, `Attendance`
/// and `Vacations` for the rest of the process.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database file.
    pub fn new() -> Result<Db> {
        let path = Config::read()?.database_path()?;
        Self::open(path)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();
        msg_debug!(format!("Opening database at {}", path.display()));
        let conn = Connection::open(path)?;
        Self::bootstrap(conn)
    }

    pub fn open_in_memory() -> Result<Db> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    /// Opens the configured database with base tables only, leaving migrations pending.
    pub fn new_without_migrations() -> Result<Connection> {
        let path = Config::read()?.database_path()?;
        Self::open_without_migrations(path)
    }

    pub fn open_without_migrations(path: impl AsRef<Path>) -> Result<Connection> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(conn)
    }

    fn bootstrap(mut conn: Connection) -> Result<Db> {
        conn.execute_batch(SCHEMA)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
