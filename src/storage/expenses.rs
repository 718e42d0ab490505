//! Expense store
//!
//! Owns the authoritative, newest-first list of expenses and persists the
//! whole list under [`STORAGE_KEY`] after every mutation.

use tracing::{debug, info, warn};

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseDraft, ExpenseId};

use super::backend::StorageBackend;

/// Key the collection is stored under
pub const STORAGE_KEY: &str = "expenses";

/// The authoritative expense collection
pub struct ExpenseStore<B: StorageBackend> {
    backend: B,
    expenses: Vec<Expense>,
}

impl<B: StorageBackend> ExpenseStore<B> {
    /// Load the persisted collection
    ///
    /// Missing, unreadable or unparseable state yields an empty collection.
    pub fn load(backend: B) -> Self {
        let expenses = match backend.get(STORAGE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<Expense>>(&blob) {
                Ok(expenses) => expenses,
                Err(e) => {
                    warn!("Ignoring unparseable persisted expenses: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read persisted expenses: {e}");
                Vec::new()
            }
        };

        debug!("Loaded {} expenses", expenses.len());
        Self { backend, expenses }
    }

    /// All expenses, newest-created first
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by full UUID or short `exp-` id
    pub fn find(&self, identifier: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id.matches(identifier))
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Accept a draft: assign id and timestamp, prepend, persist
    ///
    /// On a persistence failure the collection is left unchanged.
    pub fn add(&mut self, draft: ExpenseDraft) -> ExpenseResult<Expense> {
        let expense = Expense::from_draft(draft);
        let mut next = Vec::with_capacity(self.expenses.len() + 1);
        next.push(expense.clone());
        next.extend(self.expenses.iter().cloned());

        self.commit(next)?;
        info!("Added expense {} ({})", expense.id, expense.value);
        Ok(expense)
    }

    /// Remove an expense by id
    ///
    /// Unknown ids are a no-op and leave the persisted state untouched.
    /// Returns whether anything was removed.
    pub fn delete(&mut self, id: ExpenseId) -> ExpenseResult<bool> {
        if !self.expenses.iter().any(|e| e.id == id) {
            debug!("Delete of unknown expense {id} ignored");
            return Ok(false);
        }

        let next: Vec<Expense> = self.expenses.iter().filter(|e| e.id != id).cloned().collect();
        self.commit(next)?;
        info!("Deleted expense {id}");
        Ok(true)
    }

    /// Add every draft in order, then persist once
    pub fn import(&mut self, drafts: Vec<ExpenseDraft>) -> ExpenseResult<Vec<Expense>> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }

        let added: Vec<Expense> = drafts.into_iter().map(Expense::from_draft).collect();
        // Each draft is prepended in turn, so the last one ends up first
        let next: Vec<Expense> = added
            .iter()
            .rev()
            .chain(self.expenses.iter())
            .cloned()
            .collect();

        self.commit(next)?;
        info!("Imported {} expenses", added.len());
        Ok(added)
    }

    /// Persist `next`, then make it the current collection
    fn commit(&mut self, next: Vec<Expense>) -> ExpenseResult<()> {
        let blob = serde_json::to_string(&next)?;
        self.backend.set(STORAGE_KEY, &blob)?;
        debug!("Persisted {} expenses", next.len());
        self.expenses = next;
        Ok(())
    }
}
