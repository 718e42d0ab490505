//! Export module
//!
//! CSV encoding of expense lists and emission of export files.

pub mod csv;

pub use csv::{export_filename, expenses_to_csv, write_csv_file, CSV_HEADER};
