pub mod attendance;
pub mod employee;
pub mod export;
pub mod hours;
pub mod init;
pub mod menu;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod vacation;

use crate::libs::attendance::{parse_timestamp, truncate_to_seconds, DATE_FORMAT};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Interactive screens for every operation")]
    Menu,
    #[command(about = "Register, list, edit or delete employees", arg_required_else_help = true)]
    Employee(employee::EmployeeArgs),
    #[command(about = "Record clock-in/clock-out or show attendance state", arg_required_else_help = true)]
    Clock(attendance::ClockArgs),
    #[command(about = "Request or list vacations", arg_required_else_help = true)]
    Vacation(vacation::VacationArgs),
    #[command(about = "Show recent attendance and 7/30-day work hours")]
    Hours(hours::HoursArgs),
    #[command(about = "Export a table to CSV or JSON")]
    Export(export::ExportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect database migrations (debug builds only)")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Menu => menu::cmd(),
            Commands::Employee(args) => employee::cmd(args),
            Commands::Clock(args) => attendance::cmd(args),
            Commands::Vacation(args) => vacation::cmd(args),
            Commands::Hours(args) => hours::cmd(args),
            Commands::Export(args) => export::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Parses `YYYY-MM-DD` or the word `today`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidDate(input.to_string())))
}

/// The given `YYYY-MM-DD HH:MM:SS` timestamp, or the current local time.
pub fn timestamp_or_now(at: Option<&str>) -> Result<NaiveDateTime> {
    match at {
        Some(at) => Ok(parse_timestamp(at)?),
        None => Ok(truncate_to_seconds(Local::now().naive_local())),
    }
}
