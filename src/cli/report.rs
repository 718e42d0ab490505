//! Report CLI commands

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::services::ExpenseTracker;
use crate::storage::StorageBackend;

use super::expense::FilterArgs;

/// Handle `summary`
pub fn handle_summary_command<B: StorageBackend>(
    tracker: &mut ExpenseTracker<B>,
    settings: &Settings,
    args: FilterArgs,
) -> ExpenseResult<()> {
    tracker.set_filter(args.to_filter());
    print!("{}", tracker.view().format_summary(&settings.currency_symbol));
    Ok(())
}
