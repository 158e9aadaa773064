use crate::db::db::Db;
use crate::libs::export::{ExportData, ExportFormat, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, help = "Table to export")]
    data: ExportData,
    #[arg(long, short, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,
    #[arg(long, short, help = "Output file, defaults to hrdesk_<table>_<timestamp>.<ext>")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let db = Db::new()?;
    Exporter::new(args.format, args.data, args.output).export(&db)?;
    Ok(())
}
