use crate::db::{attendance::Attendance, db::Db};
use crate::libs::config::Config;
use crate::libs::employee::EmployeeId;
use crate::libs::hours::{recent_logs, WorkHoursSummary};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HoursArgs {
    employee_id: EmployeeId,
    #[arg(long, short, help = "Number of recent attendance rows to fetch (default from config)")]
    limit: Option<usize>,
}

pub fn cmd(args: HoursArgs) -> Result<()> {
    let limit = match args.limit {
        Some(limit) => limit,
        None => Config::read()?.recent_limit,
    };
    let db = Db::new()?;
    report(&Attendance::new(&db), args.employee_id, limit)
}

pub(crate) fn report(attendance: &Attendance, employee_id: EmployeeId, limit: usize) -> Result<()> {
    let logs = recent_logs(attendance, employee_id, limit)?;
    if logs.is_empty() {
        msg_info!(Message::NoAttendanceRecords(employee_id));
        return Ok(());
    }

    msg_print!(Message::AttendanceHeader(employee_id), true);
    View::attendance(&logs);

    msg_print!(Message::WorkHoursHeader(employee_id), true);
    View::hours(&WorkHoursSummary::from_logs(&logs));
    Ok(())
}
