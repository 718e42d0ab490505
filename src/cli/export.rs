//! CLI command for CSV export

use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::export::{export_filename, write_csv_file};
use crate::services::ExpenseTracker;
use crate::storage::StorageBackend;

use super::expense::FilterArgs;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file (default: despesas-dd-mm-yyyy.csv in the export directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export only the expenses matching --month/--category
    #[arg(long)]
    pub filtered: bool,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle `export`
pub fn handle_export_command<B: StorageBackend>(
    tracker: &mut ExpenseTracker<B>,
    settings: &Settings,
    args: ExportArgs,
) -> ExpenseResult<()> {
    tracker.set_filter(args.filter.to_filter());
    let csv = tracker.export_csv(args.filtered)?;

    let output = args.output.unwrap_or_else(|| {
        settings
            .export_dir()
            .join(export_filename(Local::now().date_naive()))
    });
    write_csv_file(&output, &csv)?;

    let rows = csv.lines().count().saturating_sub(1);
    println!("Exported {} expenses to: {}", rows, output.display());
    Ok(())
}
