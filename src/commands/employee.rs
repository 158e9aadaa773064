use super::parse_date;
use crate::db::{db::Db, employees::Employees};
use crate::libs::employee::{Department, EmployeeId, NewEmployee, Position};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    /// Register a new employee
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, value_enum)]
        position: Position,
        #[arg(long, value_enum)]
        department: Department,
        #[arg(long, default_value = "today", help = "Join date (YYYY-MM-DD or 'today')")]
        join_date: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// List all employees
    List,
    /// Overwrite an employee's fields; omitted flags keep their current value
    Edit {
        id: EmployeeId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, value_enum)]
        position: Option<Position>,
        #[arg(long, value_enum)]
        department: Option<Department>,
        #[arg(long)]
        join_date: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete an employee; attendance and vacation records are kept
    Delete {
        id: EmployeeId,
        #[arg(long, short, help = "Skip confirmation")]
        yes: bool,
    },
}

pub fn cmd(args: EmployeeArgs) -> Result<()> {
    let db = Db::new()?;
    let employees = Employees::new(&db);

    match args.command {
        EmployeeCommand::Add {
            name,
            position,
            department,
            join_date,
            email,
        } => {
            let employee = NewEmployee::new(&name, position, department, parse_date(&join_date)?, &email);
            let id = employees.register(&employee)?;
            msg_success!(Message::EmployeeRegistered(id));
        }
        EmployeeCommand::List => list(&employees)?,
        EmployeeCommand::Edit {
            id,
            name,
            position,
            department,
            join_date,
            email,
        } => {
            let Some(current) = employees.get(id)? else {
                msg_warning!(Message::EmployeeNotFound(id));
                return Ok(());
            };
            let mut updated = NewEmployee::from(&current);
            if let Some(name) = name {
                updated.name = name;
            }
            if let Some(position) = position {
                updated.position = position;
            }
            if let Some(department) = department {
                updated.department = department;
            }
            if let Some(join_date) = join_date {
                updated.join_date = parse_date(&join_date)?;
            }
            if let Some(email) = email {
                updated.email = email;
            }
            report_update(id, employees.update(id, &updated)?);
        }
        EmployeeCommand::Delete { id, yes } => {
            if !yes {
                let label = employees.get(id)?.map(|e| e.name).unwrap_or_else(|| id.to_string());
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteEmployee(label).to_string())
                    .default(false)
                    .interact()?;
                if !confirmed {
                    msg_info!(Message::OperationCancelled);
                    return Ok(());
                }
            }
            report_delete(id, employees.delete(id)?);
        }
    }

    Ok(())
}

pub(crate) fn list(employees: &Employees) -> Result<()> {
    let all = employees.list()?;
    if all.is_empty() {
        msg_info!(Message::NoEmployees);
        return Ok(());
    }
    msg_print!(Message::EmployeesHeader, true);
    View::employees(&all);
    Ok(())
}

pub(crate) fn report_update(id: EmployeeId, affected: usize) {
    if affected == 0 {
        msg_warning!(Message::EmployeeNotFound(id));
    } else {
        msg_success!(Message::EmployeeUpdated(id));
    }
}

pub(crate) fn report_delete(id: EmployeeId, affected: usize) {
    if affected == 0 {
        msg_warning!(Message::EmployeeNotFound(id));
    } else {
        msg_success!(Message::EmployeeDeleted(id));
        msg_info!(Message::EmployeeOrphanedRecords(id));
    }
}
