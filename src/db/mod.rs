//! Database layer for hrdesk.
//!
//! One SQLite file holds three tables: `employees`, `attendance_logs` and
//! `vacations`. A single [`db::Db`] handle is opened per process and lent to
//! the table modules.
//!
//! ```rust,no_run
//! use hrdesk::db::{db::Db, employees::Employees};
//!
//! let db = Db::new()?;
//! for employee in Employees::new(&db).list()? {
//!     println!("{} {}", employee.id, employee.name);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection handle and base table bootstrap.
pub mod db;

/// Versioned schema additions.
pub mod migrations;

/// Clock-in/clock-out records.
pub mod attendance;

/// Employee registry.
pub mod employees;

/// Vacation requests.
pub mod vacations;
