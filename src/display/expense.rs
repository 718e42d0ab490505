//! Expense display formatting
//!
//! Register rows and detail blocks for the terminal.

use crate::models::Expense;

/// Date layout shown to the user
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, currency_symbol: &str) -> String {
    format!(
        "{:12} {} {} {:16} {:28} {:>14}",
        expense.id.short(),
        expense.date.format(DISPLAY_DATE_FORMAT),
        expense.category.icon(),
        truncate(expense.category.label(), 16),
        truncate(&expense.description, 28),
        expense.value.format_with_symbol(currency_symbol)
    )
}

/// Format a list of expenses as a register
pub fn format_expense_register(expenses: &[Expense], currency_symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:19} {:28} {:>14}\n",
        "ID", "Date", "Category", "Description", "Value"
    ));
    output.push_str(&"-".repeat(87));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency_symbol));
        output.push('\n');
    }

    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id.short()));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Value:       {}\n",
        expense.value.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Category:    {} {}\n",
        expense.category.icon(),
        expense.category.label()
    ));
    output.push_str(&format!(
        "Date:        {}\n",
        expense.date.format(DISPLAY_DATE_FORMAT)
    ));
    output.push_str(&format!(
        "Created:     {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

/// Pad or cut a string to `max_len` characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseDraft, Money};
    use chrono::NaiveDate;

    fn expense(description: &str) -> Expense {
        Expense::from_draft(ExpenseDraft::new(
            description,
            Money::from_cents(123456),
            Category::Health,
            NaiveDate::from_ymd_opt(2025, 2, 7).unwrap(),
        ))
    }

    #[test]
    fn test_row_contents() {
        let e = expense("Consulta");
        let row = format_expense_row(&e, "R$");
        assert!(row.starts_with(&e.id.short()));
        assert!(row.contains("07/02/2025"));
        assert!(row.contains("Saúde"));
        assert!(row.contains("R$ 1.234,56"));
    }

    #[test]
    fn test_long_description_is_cut_on_char_boundary() {
        let row = format_expense_row(&expense(&"ção".repeat(20)), "R$");
        assert!(row.contains("..."));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_expense_register(&[], "R$"), "No expenses found.\n");
    }

    #[test]
    fn test_register_has_header_and_rows() {
        let output = format_expense_register(&[expense("A"), expense("B")], "R$");
        assert_eq!(output.lines().count(), 4);
        assert!(output.starts_with("ID"));
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(&expense("Consulta"), "R$");
        assert!(output.contains("Description: Consulta"));
        assert!(output.contains("Category:    💊 Saúde"));
    }
}
