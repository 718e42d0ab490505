use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add_command, handle_categories_command, handle_delete_command, handle_export_command,
    handle_import_command, handle_list_command, handle_show_command, handle_summary_command, AddArgs,
    ExportArgs, FilterArgs, ImportArgs,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::services::ExpenseTracker;
use expense_tracker::storage::FileBackend;
use expense_tracker::ExpenseResult;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Record expenses in fixed categories, review them month by month \
                  with totals and a category breakdown, and move them in and out \
                  of spreadsheets as CSV."
)]
struct Cli {
    /// Log verbosity for this program (RUST_LOG overrides it)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List the expenses of a month
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Show totals and the top categories of a month
    Summary(FilterArgs),

    /// Show the details of one expense
    Show {
        /// Expense id (exp-xxxxxxxx or full UUID)
        id: String,
    },

    /// Delete an expense by id
    #[command(alias = "rm")]
    Delete {
        /// Expense id (exp-xxxxxxxx or full UUID)
        id: String,
    },

    /// Export expenses to a CSV file
    Export(ExportArgs),

    /// Import expenses from a CSV file
    Import(ImportArgs),

    /// List the available categories
    Categories,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to config.json for editing
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense tracker");
        println!();
        println!("Run 'expenses --help' for usage information.");
        return Ok(());
    };

    match run(command, paths, &settings) {
        Err(e) if e.is_notice() => {
            println!("{e}");
            Ok(())
        }
        other => Ok(other?),
    }
}

fn run(command: Commands, paths: ExpensePaths, settings: &Settings) -> ExpenseResult<()> {
    if let Commands::Config { init } = command {
        if init {
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!();
        }
        println!("Expense Tracker Configuration");
        println!("=============================");
        println!("Base directory:  {}", paths.base_dir().display());
        println!("Data directory:  {}", paths.data_dir().display());
        println!("Settings file:   {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol:  {}", settings.currency_symbol);
        println!("  Default category: {}", settings.default_category.key());
        println!("  Export directory: {}", settings.export_dir().display());
        return Ok(());
    }

    if let Commands::Categories = command {
        handle_categories_command();
        return Ok(());
    }

    let mut tracker = ExpenseTracker::load(FileBackend::new(paths));

    match command {
        Commands::Add(args) => handle_add_command(&mut tracker, settings, args),
        Commands::List(args) => handle_list_command(&mut tracker, settings, args),
        Commands::Summary(args) => handle_summary_command(&mut tracker, settings, args),
        Commands::Show { id } => handle_show_command(&tracker, settings, &id),
        Commands::Delete { id } => handle_delete_command(&mut tracker, &id),
        Commands::Export(args) => handle_export_command(&mut tracker, settings, args),
        Commands::Import(args) => handle_import_command(&mut tracker, args),
        Commands::Config { .. } | Commands::Categories => Ok(()),
    }
}

/// Route `tracing` output to stderr
///
/// `RUST_LOG` takes precedence; otherwise `level` applies to this crate.
fn init_logger(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "expense_tracker={level},{}={level}",
            env!("CARGO_CRATE_NAME")
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
