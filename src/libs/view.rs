use super::attendance::{format_timestamp, AttendanceLog};
use super::employee::Employee;
use super::formatter::format_hours;
use super::hours::WorkHoursSummary;
use super::vacation::Vacation;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn employees(employees: &[Employee]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "POSITION", "DEPARTMENT", "JOIN DATE", "EMAIL"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                employee.name,
                employee.position,
                employee.department,
                employee.join_date,
                employee.email
            ]);
        }
        table.printstd();
    }

    pub fn attendance(logs: &[AttendanceLog]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "CLOCK IN", "CLOCK OUT", "LOCATION", "HOURS"]);
        for log in logs {
            table.add_row(row![
                log.id,
                log.date,
                log.clock_in.map(format_timestamp).unwrap_or_default(),
                log.clock_out.map(format_timestamp).unwrap_or_default(),
                log.location,
                format_hours(log.duration_hours())
            ]);
        }
        table.printstd();
    }

    pub fn vacations(vacations: &[Vacation]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TYPE", "START", "END", "DAYS", "REASON"]);
        for vacation in vacations {
            table.add_row(row![
                vacation.id,
                vacation.vacation_type,
                vacation.start_date,
                vacation.end_date,
                vacation.days,
                vacation.reason
            ]);
        }
        table.printstd();
    }

    pub fn hours(summary: &WorkHoursSummary) {
        let mut table = Table::new();

        table.add_row(row!["WINDOW", "HOURS"]);
        table.add_row(row!["Last 7 days", format_hours(summary.last_7)]);
        table.add_row(row!["Last 30 days", format_hours(summary.last_30)]);
        table.printstd();
    }
}
