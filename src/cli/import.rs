//! CLI command for CSV import

use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::error::ExpenseResult;
use crate::services::{read_csv_file, ExpenseTracker};
use crate::storage::StorageBackend;

/// Arguments for `import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV file (Descrição,Valor,Categoria,Data)
    pub file: PathBuf,
}

/// Handle `import`
pub fn handle_import_command<B: StorageBackend>(
    tracker: &mut ExpenseTracker<B>,
    args: ImportArgs,
) -> ExpenseResult<()> {
    let content = read_csv_file(&args.file)?;
    let imported = tracker.import_csv(&content, Local::now().date_naive())?;

    println!(
        "{} expenses imported from {}",
        imported.len(),
        args.file.display()
    );
    Ok(())
}
