use super::parse_date;
use crate::db::{db::Db, vacations::Vacations};
use crate::libs::employee::EmployeeId;
use crate::libs::messages::Message;
use crate::libs::vacation::{total_days, VacationRequest, VacationType};
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct VacationArgs {
    #[command(subcommand)]
    command: VacationCommand,
}

#[derive(Debug, Subcommand)]
enum VacationCommand {
    /// Register a vacation; the day count includes both start and end date
    Request {
        employee_id: EmployeeId,
        #[arg(long = "type", value_enum, default_value_t = VacationType::Annual)]
        kind: VacationType,
        #[arg(long, help = "First day (YYYY-MM-DD or 'today')")]
        start: String,
        #[arg(long, help = "Last day (YYYY-MM-DD or 'today')")]
        end: String,
        #[arg(long, default_value = "")]
        reason: String,
    },
    /// List an employee's vacations
    List { employee_id: EmployeeId },
}

pub fn cmd(args: VacationArgs) -> Result<()> {
    let db = Db::new()?;
    let vacations = Vacations::new(&db);

    match args.command {
        VacationCommand::Request {
            employee_id,
            kind,
            start,
            end,
            reason,
        } => {
            let request = VacationRequest::new(employee_id, kind, parse_date(&start)?, parse_date(&end)?, &reason)?;
            submit(&vacations, &request)?;
        }
        VacationCommand::List { employee_id } => list(&vacations, employee_id)?,
    }

    Ok(())
}

pub(crate) fn submit(vacations: &Vacations, request: &VacationRequest) -> Result<()> {
    vacations.request(request)?;
    msg_success!(Message::VacationRegistered(request.days));
    Ok(())
}

pub(crate) fn list(vacations: &Vacations, employee_id: EmployeeId) -> Result<()> {
    let rows = vacations.for_employee(employee_id)?;
    if rows.is_empty() {
        msg_info!(Message::NoVacations(employee_id));
        return Ok(());
    }
    msg_print!(Message::VacationsHeader(employee_id), true);
    View::vacations(&rows);
    msg_print!(Message::VacationDaysUsed(total_days(&rows)));
    Ok(())
}
