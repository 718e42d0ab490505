//! Expense CLI commands
//!
//! Implements `add`, `list`, `show` and `delete`.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_register};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Month, NewExpense};
use crate::reports::{CategoryFilter, ExpenseFilter};
use crate::services::ExpenseTracker;
use crate::storage::StorageBackend;

/// Month and category selection shared by the viewing commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Month to show (YYYY-MM, default: current month)
    #[arg(short, long)]
    pub month: Option<Month>,

    /// Category key or label, or "all"
    #[arg(short, long)]
    pub category: Option<CategoryFilter>,
}

impl FilterArgs {
    /// Build the filter, defaulting to every category of the current month
    pub fn to_filter(&self) -> ExpenseFilter {
        ExpenseFilter::new(
            self.category.unwrap_or_default(),
            self.month.unwrap_or_else(Month::current),
        )
    }
}

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub description: String,

    /// Amount, e.g. "25,90" or "25.90"
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Category key or label (default: from settings)
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Date (YYYY-MM-DD or DD/MM/YYYY, default: today)
    #[arg(short, long, value_parser = parse_entry_date)]
    pub date: Option<NaiveDate>,
}

/// Parse a date given on the command line
pub fn parse_entry_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD or DD/MM/YYYY", s))
}

/// Handle `add`
pub fn handle_add_command<B: StorageBackend>(
    tracker: &mut ExpenseTracker<B>,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let entry = NewExpense {
        description: args.description,
        value: args.value,
        category: args.category.unwrap_or(settings.default_category),
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
    };

    let expense = tracker.add_entry(entry)?;
    println!(
        "Added {}: {} ({}) on {}",
        expense.id.short(),
        expense.description,
        expense.value.format_with_symbol(&settings.currency_symbol),
        expense.date.format("%d/%m/%Y")
    );

    Ok(())
}

/// Handle `list`
pub fn handle_list_command<B: StorageBackend>(
    tracker: &mut ExpenseTracker<B>,
    settings: &Settings,
    args: FilterArgs,
) -> ExpenseResult<()> {
    tracker.set_filter(args.to_filter());
    let view = tracker.view();

    println!(
        "{} · {}\n",
        view.filter.month.display_name(),
        view.filter.category
    );
    print!(
        "{}",
        format_expense_register(&view.expenses, &settings.currency_symbol)
    );

    Ok(())
}

/// Handle `show`
pub fn handle_show_command<B: StorageBackend>(
    tracker: &ExpenseTracker<B>,
    settings: &Settings,
    identifier: &str,
) -> ExpenseResult<()> {
    let expense = tracker
        .find(identifier)
        .ok_or_else(|| ExpenseError::expense_not_found(identifier))?;
    print!(
        "{}",
        format_expense_details(expense, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command<B: StorageBackend>(
    tracker: &mut ExpenseTracker<B>,
    identifier: &str,
) -> ExpenseResult<()> {
    match tracker.delete(identifier)? {
        Some(expense) => println!(
            "Deleted {}: {}",
            expense.id.short(),
            expense.description
        ),
        None => println!("No expense matches '{}'. Nothing deleted.", identifier),
    }

    Ok(())
}
