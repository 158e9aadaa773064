//! Core library modules for hrdesk.
//!
//! - **Domain records**: employees, attendance logs, vacations
//! - **Aggregation**: recent work-hours totals
//! - **Infrastructure**: configuration, data storage, messaging, errors
//! - **Presentation**: console tables, formatting, export

pub mod attendance;
pub mod config;
pub mod data_storage;
pub mod employee;
pub mod error;
pub mod export;
pub mod formatter;
pub mod hours;
pub mod messages;
pub mod vacation;
pub mod view;
