//! CSV export
//!
//! Writes expenses in the spreadsheet-friendly pt-BR layout:
//!
//! ```text
//! Descrição,Valor,Categoria,Data
//! "Almoço, ""executivo""",25,90,Alimentação,15/01/2025
//! ```
//!
//! The byte-order marker is only added when the text is written to a file.

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::write_atomic;

/// Fixed header line
pub const CSV_HEADER: &str = "Descrição,Valor,Categoria,Data";

/// UTF-8 byte-order marker prepended to exported files
pub const BOM: &str = "\u{FEFF}";

/// Date layout used in CSV files (dd/mm/yyyy)
pub const CSV_DATE_FORMAT: &str = "%d/%m/%Y";

/// Encode expenses as CSV text, rows in input order, `\n`-joined
pub fn expenses_to_csv(expenses: &[Expense]) -> String {
    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(expenses.iter().map(csv_row));
    lines.join("\n")
}

fn csv_row(expense: &Expense) -> String {
    format!(
        "{},{},{},{}",
        quote_field(&expense.description),
        expense.value.to_csv_decimal(),
        expense.category.label(),
        expense.date.format(CSV_DATE_FORMAT)
    )
}

/// Always quote, doubling embedded quotes
fn quote_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Default export file name for a given export date
pub fn export_filename(date: NaiveDate) -> String {
    format!("despesas-{}.csv", date.format("%d-%m-%Y"))
}

/// Write CSV text to `path`, prefixed with a byte-order marker
pub fn write_csv_file<P: AsRef<Path>>(path: P, content: &str) -> ExpenseResult<()> {
    let path = path.as_ref();
    let mut bytes = Vec::with_capacity(BOM.len() + content.len());
    bytes.extend_from_slice(BOM.as_bytes());
    bytes.extend_from_slice(content.as_bytes());

    write_atomic(path, &bytes).map_err(|e| {
        ExpenseError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!("Wrote CSV export to {}", path.display());
    Ok(())
}
