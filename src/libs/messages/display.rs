//! Text for every user-facing [`Message`].
//!
//! All wording lives here so commands only ever pick a variant and fill in
//! its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === EMPLOYEE MESSAGES ===
            Message::EmployeeRegistered(id) => format!("Employee registered with ID {}", id),
            Message::EmployeeUpdated(id) => format!("Employee {} updated", id),
            Message::EmployeeDeleted(id) => format!("Employee {} deleted", id),
            Message::EmployeeNotFound(id) => format!("No employee with ID {}, nothing changed", id),
            Message::EmployeesHeader => "Employees".to_string(),
            Message::NoEmployees => "No employees registered yet".to_string(),
            Message::EmployeeOrphanedRecords(id) => {
                format!("Attendance and vacation records of employee {} are kept", id)
            }

            // === ATTENDANCE MESSAGES ===
            Message::ClockedIn(ts) => format!("Clock-in recorded: {}", ts),
            Message::ClockedOut(ts) => format!("Clock-out recorded: {}", ts),
            Message::ClockOutWithoutClockIn(id, date) => {
                format!("Employee {} has no clock-in on {}, nothing to clock out", id, date)
            }
            Message::AlreadyClockedIn(id) => format!("Employee {} is already clocked in today", id),
            Message::AttendanceStatus(id, date, state) => format!("Employee {} on {}: {}", id, date, state),
            Message::AttendanceHeader(id) => format!("Attendance of employee {}", id),
            Message::NoAttendanceRecords(id) => format!("No attendance records for employee {}", id),
            Message::WorkedToday(duration) => format!("Worked today: {}", duration),
            Message::WorkTimeUnavailable => "Record both clock-in and clock-out first".to_string(),

            // === VACATION MESSAGES ===
            Message::VacationRegistered(days) => format!("{}-day vacation registered", days),
            Message::VacationsHeader(id) => format!("Vacations of employee {}", id),
            Message::NoVacations(id) => format!("No vacations recorded for employee {}", id),
            Message::VacationDaysUsed(days) => format!("Vacation days used: {}", days),

            // === WORK HOURS MESSAGES ===
            Message::WorkHoursHeader(id) => format!("Work hours of employee {}", id),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportingData(data, format) => format!("Exporting {} as {}", data, format),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::DatabaseLocation(path) => format!("Database: {}", path),

            // === MENU MESSAGES ===
            Message::MenuTitle => "HR desk".to_string(),
            Message::MenuGoodbye => "Bye".to_string(),

            // === PROMPTS ===
            Message::PromptSelectScreen => "Select a screen".to_string(),
            Message::PromptSelectEmployee => "Select employee (ID)".to_string(),
            Message::PromptName => "Name".to_string(),
            Message::PromptPosition => "Position".to_string(),
            Message::PromptDepartment => "Department".to_string(),
            Message::PromptJoinDate => "Join date (YYYY-MM-DD)".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptLocation => "Location".to_string(),
            Message::PromptCustomLocation => "Location name".to_string(),
            Message::PromptAttendanceAction => "Action".to_string(),
            Message::PromptVacationType => "Vacation type".to_string(),
            Message::PromptStartDate => "Start date (YYYY-MM-DD)".to_string(),
            Message::PromptEndDate => "End date (YYYY-MM-DD)".to_string(),
            Message::PromptReason => "Reason".to_string(),
            Message::PromptDatabasePath => "Database file path (empty for default)".to_string(),
            Message::PromptDefaultLocation => "Default work location".to_string(),
            Message::PromptRecentLimit => "Attendance rows shown in reports".to_string(),
            Message::ConfirmDeleteEmployee(name) => format!("Delete employee '{}'?", name),
            Message::ConfirmClockInAgain => "Already clocked in today. Record another clock-in?".to_string(),
            Message::ConfirmRequestVacation => "Request a new vacation?".to_string(),

            // === MIGRATION MESSAGES ===
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database has pending migrations".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::RevertingMigration(version, name) => format!("Reverting migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),

            // === GENERAL ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidDate(input) => format!("'{}' is not a date, expected YYYY-MM-DD", input),
        };
        write!(f, "{}", s)
    }
}
