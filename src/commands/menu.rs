//! Interactive menu.
//!
//! One screen per HR action, picked from a list until the user quits:
//! register, list, edit and delete employees, attendance (clock-in/out and
//! the day's status) and vacations with the work-hours report.

use super::{attendance, employee, hours, parse_date, timestamp_or_now, vacation};
use crate::db::{attendance::Attendance, db::Db, employees::Employees, vacations::Vacations};
use crate::libs::attendance::{AttendanceState, Location};
use crate::libs::config::Config;
use crate::libs::employee::{Department, Employee, EmployeeId, NewEmployee, Position};
use crate::libs::messages::Message;
use crate::libs::vacation::{VacationRequest, VacationType};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Register,
    List,
    Edit,
    Delete,
    Attendance,
    VacationAndReports,
    Quit,
}

impl Screen {
    const ALL: [Screen; 7] = [
        Screen::Register,
        Screen::List,
        Screen::Edit,
        Screen::Delete,
        Screen::Attendance,
        Screen::VacationAndReports,
        Screen::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Screen::Register => "Register employee",
            Screen::List => "Employee list",
            Screen::Edit => "Edit employee",
            Screen::Delete => "Delete employee",
            Screen::Attendance => "Clock in / out",
            Screen::VacationAndReports => "Vacations and work hours",
            Screen::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum AttendanceAction {
    ClockIn,
    ClockOut,
    Status,
}

impl AttendanceAction {
    const ALL: [AttendanceAction; 3] = [AttendanceAction::ClockIn, AttendanceAction::ClockOut, AttendanceAction::Status];

    fn label(&self) -> &'static str {
        match self {
            AttendanceAction::ClockIn => "Clock in",
            AttendanceAction::ClockOut => "Clock out",
            AttendanceAction::Status => "Today's status",
        }
    }
}

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let db = Db::new()?;
    let theme = ColorfulTheme::default();
    let labels: Vec<&str> = Screen::ALL.iter().map(Screen::label).collect();

    msg_print!(Message::MenuTitle, true);
    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt(Message::PromptSelectScreen.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        let screen = Screen::ALL[selection];
        if screen == Screen::Quit {
            msg_print!(Message::MenuGoodbye);
            return Ok(());
        }
        // A failed screen is reported and the menu keeps running.
        if let Err(e) = run_screen(screen, &db, &config, &theme) {
            msg_error!(e);
        }
    }
}

fn run_screen(screen: Screen, db: &Db, config: &Config, theme: &ColorfulTheme) -> Result<()> {
    let employees = Employees::new(db);
    match screen {
        Screen::Register => {
            let form = employee_form(theme, None)?;
            let id = employees.register(&form)?;
            msg_success!(Message::EmployeeRegistered(id));
        }
        Screen::List => employee::list(&employees)?,
        Screen::Edit => {
            if let Some(current) = select_employee(&employees, theme)? {
                let form = employee_form(theme, Some(&current))?;
                employee::report_update(current.id, employees.update(current.id, &form)?);
            }
        }
        Screen::Delete => {
            if let Some(current) = select_employee(&employees, theme)? {
                let confirmed = Confirm::with_theme(theme)
                    .with_prompt(Message::ConfirmDeleteEmployee(current.name.clone()).to_string())
                    .default(false)
                    .interact()?;
                if confirmed {
                    employee::report_delete(current.id, employees.delete(current.id)?);
                } else {
                    msg_info!(Message::OperationCancelled);
                }
            }
        }
        Screen::Attendance => {
            if let Some(current) = select_employee(&employees, theme)? {
                attendance_screen(&Attendance::new(db), current.id, config, theme)?;
            }
        }
        Screen::VacationAndReports => {
            if let Some(current) = select_employee(&employees, theme)? {
                vacation_screen(db, current.id, config, theme)?;
            }
        }
        Screen::Quit => {}
    }
    Ok(())
}

fn attendance_screen(attendance: &Attendance, employee_id: EmployeeId, config: &Config, theme: &ColorfulTheme) -> Result<()> {
    let labels: Vec<&str> = AttendanceAction::ALL.iter().map(AttendanceAction::label).collect();
    let action = AttendanceAction::ALL[Select::with_theme(theme)
        .with_prompt(Message::PromptAttendanceAction.to_string())
        .items(&labels)
        .default(0)
        .interact()?];

    let now = timestamp_or_now(None)?;
    match action {
        AttendanceAction::ClockIn => {
            if attendance.state(employee_id, now.date())? == AttendanceState::ClockedIn {
                let again = Confirm::with_theme(theme)
                    .with_prompt(Message::ConfirmClockInAgain.to_string())
                    .default(false)
                    .interact()?;
                if !again {
                    msg_info!(Message::OperationCancelled);
                    return Ok(());
                }
            }
            let location = select_location(theme, &config.location())?;
            attendance::clock_in(attendance, employee_id, &location, now)?;
        }
        AttendanceAction::ClockOut => attendance::clock_out(attendance, employee_id, now)?,
        AttendanceAction::Status => attendance::status(attendance, employee_id, now.date())?,
    }
    Ok(())
}

fn vacation_screen(db: &Db, employee_id: EmployeeId, config: &Config, theme: &ColorfulTheme) -> Result<()> {
    let vacations = Vacations::new(db);
    vacation::list(&vacations, employee_id)?;
    hours::report(&Attendance::new(db), employee_id, config.recent_limit)?;

    let request_new = Confirm::with_theme(theme)
        .with_prompt(Message::ConfirmRequestVacation.to_string())
        .default(false)
        .interact()?;
    if !request_new {
        return Ok(());
    }

    let types: Vec<&str> = VacationType::ALL.iter().map(VacationType::as_str).collect();
    let kind = VacationType::ALL[Select::with_theme(theme)
        .with_prompt(Message::PromptVacationType.to_string())
        .items(&types)
        .default(0)
        .interact()?];

    let start = prompt_date(theme, Message::PromptStartDate, Local::now().date_naive())?;
    let end = prompt_date(theme, Message::PromptEndDate, start)?;
    let reason: String = Input::with_theme(theme)
        .with_prompt(Message::PromptReason.to_string())
        .allow_empty(true)
        .interact_text()?;

    let request = VacationRequest::new(employee_id, kind, start, end, &reason)?;
    vacation::submit(&vacations, &request)
}

/// Lets the user pick an employee by id. `None` when the registry is empty.
fn select_employee(employees: &Employees, theme: &ColorfulTheme) -> Result<Option<Employee>> {
    let all = employees.list()?;
    if all.is_empty() {
        msg_info!(Message::NoEmployees);
        return Ok(None);
    }

    let labels: Vec<String> = all.iter().map(|e| format!("{} - {}", e.id, e.name)).collect();
    let selection = Select::with_theme(theme)
        .with_prompt(Message::PromptSelectEmployee.to_string())
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(all.into_iter().nth(selection))
}

/// Register/edit form. Edits start from the employee's current values.
fn employee_form(theme: &ColorfulTheme, current: Option<&Employee>) -> Result<NewEmployee> {
    let name: String = Input::with_theme(theme)
        .with_prompt(Message::PromptName.to_string())
        .with_initial_text(current.map(|e| e.name.clone()).unwrap_or_default())
        .interact_text()?;

    let positions: Vec<&str> = Position::ALL.iter().map(Position::as_str).collect();
    let position = Position::ALL[Select::with_theme(theme)
        .with_prompt(Message::PromptPosition.to_string())
        .items(&positions)
        .default(current.and_then(|e| Position::ALL.iter().position(|p| *p == e.position)).unwrap_or(0))
        .interact()?];

    let departments: Vec<&str> = Department::ALL.iter().map(Department::as_str).collect();
    let department = Department::ALL[Select::with_theme(theme)
        .with_prompt(Message::PromptDepartment.to_string())
        .items(&departments)
        .default(current.and_then(|e| Department::ALL.iter().position(|d| *d == e.department)).unwrap_or(0))
        .interact()?];

    let join_date = prompt_date(
        theme,
        Message::PromptJoinDate,
        current.map(|e| e.join_date).unwrap_or_else(|| Local::now().date_naive()),
    )?;

    let email: String = Input::with_theme(theme)
        .with_prompt(Message::PromptEmail.to_string())
        .with_initial_text(current.map(|e| e.email.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    Ok(NewEmployee::new(&name, position, department, join_date, &email))
}

fn prompt_date(theme: &ColorfulTheme, prompt: Message, default: NaiveDate) -> Result<NaiveDate> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .default(default.to_string())
        .validate_with(|s: &String| parse_date(s).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    parse_date(&input)
}

/// Preset sites first, then a free-text option.
fn select_location(theme: &ColorfulTheme, default: &Location) -> Result<Location> {
    let mut labels: Vec<String> = Location::PRESETS.iter().map(ToString::to_string).collect();
    labels.push("other...".to_string());
    let preselected = Location::PRESETS.iter().position(|l| l == default).unwrap_or(0);

    let selection = Select::with_theme(theme)
        .with_prompt(Message::PromptLocation.to_string())
        .items(&labels)
        .default(preselected)
        .interact()?;

    match Location::PRESETS.get(selection) {
        Some(location) => Ok(location.clone()),
        None => {
            let text: String = Input::with_theme(theme)
                .with_prompt(Message::PromptCustomLocation.to_string())
                .default(default.to_string())
                .interact_text()?;
            Ok(text.parse().unwrap_or_default())
        }
    }
}
