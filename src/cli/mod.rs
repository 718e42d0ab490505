//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tracker service.

pub mod category;
pub mod expense;
pub mod export;
pub mod import;
pub mod report;

pub use category::handle_categories_command;
pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, handle_show_command, AddArgs,
    FilterArgs,
};
pub use export::{handle_export_command, ExportArgs};
pub use import::{handle_import_command, ImportArgs};
pub use report::handle_summary_command;
