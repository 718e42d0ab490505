//! Core data models
//!
//! The expense record, its fixed category taxonomy, and the value types
//! (money, ids, months) they are built from.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use category::Category;
pub use expense::{Expense, ExpenseDraft, NewExpense};
pub use ids::ExpenseId;
pub use money::Money;
pub use period::Month;
