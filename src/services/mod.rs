//! Service layer
//!
//! CSV decoding and the tracker controller that ties the store to the
//! active filter.

pub mod import;
pub mod tracker;

pub use import::{parse_csv, parse_csv_with_fallback, read_csv_file};
pub use tracker::ExpenseTracker;
