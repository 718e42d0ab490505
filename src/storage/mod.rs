//! Storage layer
//!
//! Blob backends with atomic file writes, and the expense store built on
//! top of them.

pub mod backend;
pub mod expenses;
pub mod file_io;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use expenses::{ExpenseStore, STORAGE_KEY};
pub use file_io::{read_text_if_exists, write_atomic};
