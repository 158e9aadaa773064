//! # hrdesk
//!
//! A small HR administration tool for the terminal.
//!
//! ## Features
//!
//! - **Employee Registry**: register, list, edit and delete employees
//! - **Attendance**: clock-in/clock-out per employee and day
//! - **Vacations**: inclusive day counting for vacation requests
//! - **Work Hours**: 7-row and 30-row totals over recent attendance
//! - **Export**: CSV or JSON dumps of every table
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hrdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
