//! Reports
//!
//! Filtered views and summaries over the expense collection.

pub mod view;

pub use view::{
    derive_view, filter_expenses, summarize, CategoryFilter, CategoryShare, ExpenseFilter,
    ExpenseSummary, ExpenseView, TOP_CATEGORY_LIMIT,
};
