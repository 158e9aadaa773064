//! Table dumps to CSV or JSON.
//!
//! Each export writes one table. CSV output has a header row followed by one
//! record per database row; JSON output is a pretty-printed array.

use super::attendance::{format_timestamp, AttendanceLog};
use crate::db::{attendance::Attendance, db::Db, employees::Employees, vacations::Vacations};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_success};
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    Employees,
    Attendance,
    Vacations,
}

impl ExportData {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportData::Employees => "employees",
            ExportData::Attendance => "attendance",
            ExportData::Vacations => "vacations",
        }
    }
}

/// Attendance row with the derived hours column.
#[derive(Debug, Serialize)]
pub struct ExportAttendance {
    pub id: i64,
    pub employee_id: i64,
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub location: String,
    pub duration_hours: f64,
}

impl From<&AttendanceLog> for ExportAttendance {
    fn from(log: &AttendanceLog) -> Self {
        ExportAttendance {
            id: log.id,
            employee_id: log.employee_id,
            date: log.date.to_string(),
            clock_in: log.clock_in.map(format_timestamp).unwrap_or_default(),
            clock_out: log.clock_out.map(format_timestamp).unwrap_or_default(),
            location: log.location.to_string(),
            duration_hours: log.duration_hours(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    data: ExportData,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named `hrdesk_<data>_<timestamp>.<ext>`.
    pub fn new(format: ExportFormat, data: ExportData, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "hrdesk_{}_{}.{}",
                data.as_str(),
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, data, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn data(&self) -> ExportData {
        self.data
    }

    /// Writes the table and returns the number of exported rows.
    pub fn export(&self, db: &Db) -> Result<usize> {
        msg_debug!(Message::ExportingData(self.data.as_str().to_string(), self.format.extension().to_string()));

        let count = match self.data {
            ExportData::Employees => self.write(&Employees::new(db).list()?)?,
            ExportData::Attendance => {
                let rows: Vec<ExportAttendance> = Attendance::new(db).list()?.iter().map(ExportAttendance::from).collect();
                self.write(&rows)?
            }
            ExportData::Vacations => self.write(&Vacations::new(db).list()?)?,
        };

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(count)
    }

    fn write<T: Serialize>(&self, rows: &[T]) -> Result<usize> {
        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(&self.output_path)?;
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }
        Ok(rows.len())
    }
}
