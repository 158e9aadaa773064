use super::{parse_date, timestamp_or_now};
use crate::db::{attendance::Attendance, db::Db};
use crate::libs::attendance::{format_timestamp, AttendanceState, Location};
use crate::libs::config::Config;
use crate::libs::employee::EmployeeId;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ClockArgs {
    #[command(subcommand)]
    command: ClockCommand,
}

#[derive(Debug, Subcommand)]
enum ClockCommand {
    /// Record a clock-in for today
    In {
        employee_id: EmployeeId,
        #[arg(long, short, help = "head-office, remote or any site name")]
        location: Option<String>,
        #[arg(long, help = "Timestamp (YYYY-MM-DD HH:MM:SS), defaults to now")]
        at: Option<String>,
    },
    /// Record a clock-out on today's rows
    Out {
        employee_id: EmployeeId,
        #[arg(long, help = "Timestamp (YYYY-MM-DD HH:MM:SS), defaults to now")]
        at: Option<String>,
    },
    /// Show attendance state and rows for a day
    Status {
        employee_id: EmployeeId,
        #[arg(long, short, default_value = "today", help = "Date (YYYY-MM-DD or 'today')")]
        date: String,
    },
}

pub fn cmd(args: ClockArgs) -> Result<()> {
    let db = Db::new()?;
    let attendance = Attendance::new(&db);

    match args.command {
        ClockCommand::In {
            employee_id,
            location,
            at,
        } => {
            let location = match location {
                Some(location) => location.parse().unwrap_or_default(),
                None => Config::read()?.location(),
            };
            let timestamp = timestamp_or_now(at.as_deref())?;
            if attendance.state(employee_id, timestamp.date())? == AttendanceState::ClockedIn {
                msg_warning!(Message::AlreadyClockedIn(employee_id));
            }
            clock_in(&attendance, employee_id, &location, timestamp)?;
        }
        ClockCommand::Out { employee_id, at } => {
            clock_out(&attendance, employee_id, timestamp_or_now(at.as_deref())?)?;
        }
        ClockCommand::Status { employee_id, date } => status(&attendance, employee_id, parse_date(&date)?)?,
    }

    Ok(())
}

pub(crate) fn clock_in(
    attendance: &Attendance,
    employee_id: EmployeeId,
    location: &Location,
    timestamp: NaiveDateTime,
) -> Result<()> {
    attendance.clock_in(employee_id, location, timestamp)?;
    msg_success!(Message::ClockedIn(format_timestamp(timestamp)));
    Ok(())
}

pub(crate) fn clock_out(attendance: &Attendance, employee_id: EmployeeId, timestamp: NaiveDateTime) -> Result<()> {
    if attendance.clock_out(employee_id, timestamp)? == 0 {
        msg_warning!(Message::ClockOutWithoutClockIn(employee_id, timestamp.date().to_string()));
    } else {
        msg_success!(Message::ClockedOut(format_timestamp(timestamp)));
    }
    Ok(())
}

/// State, rows and worked time of one employee for one day.
pub(crate) fn status(attendance: &Attendance, employee_id: EmployeeId, date: NaiveDate) -> Result<()> {
    let logs = attendance.for_day(employee_id, date)?;
    let state = AttendanceState::from_latest(logs.last());
    msg_print!(Message::AttendanceStatus(employee_id, date.to_string(), state.to_string()));

    if logs.is_empty() {
        return Ok(());
    }
    View::attendance(&logs);
    match logs.last().and_then(|log| log.worked()) {
        Some(worked) => msg_info!(Message::WorkedToday(format_duration(&worked))),
        None => msg_info!(Message::WorkTimeUnavailable),
    }
    Ok(())
}
