//! Category CLI commands

use crate::display::format_category_list;

/// Handle `categories`
pub fn handle_categories_command() {
    print!("{}", format_category_list());
}
