//! Expense tracker - personal expense tracking with CSV import/export
//!
//! This library provides the core of a personal expense tracker: expense
//! records in fixed categories, a persisted store, a CSV codec using
//! Brazilian conventions, and a month and category view with totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory and settings management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, months)
//! - `storage`: Blob backends and the expense store
//! - `export`: CSV encoding and export files
//! - `services`: CSV decoding and the tracker controller
//! - `reports`: Filtered views and summaries
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::ExpensePaths;
//! use expense_tracker::services::ExpenseTracker;
//! use expense_tracker::storage::FileBackend;
//!
//! let paths = ExpensePaths::new()?;
//! let tracker = ExpenseTracker::load(FileBackend::new(paths));
//! println!("{}", tracker.view().format_summary("R$"));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
