//! Expense tracker service
//!
//! Ties the store to the active filter. Mutations go through the store, which
//! persists them; the view is derived on demand from the current collection
//! and filter so it can never go stale.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::expenses_to_csv;
use crate::models::{Expense, ExpenseDraft, Month, NewExpense};
use crate::reports::{derive_view, CategoryFilter, ExpenseFilter, ExpenseView};
use crate::storage::{ExpenseStore, StorageBackend};

use super::import::parse_csv_with_fallback;

/// Store plus filter state
pub struct ExpenseTracker<B: StorageBackend> {
    store: ExpenseStore<B>,
    filter: ExpenseFilter,
}

impl<B: StorageBackend> ExpenseTracker<B> {
    /// Wrap a store, filtering all categories of `month`
    pub fn new(store: ExpenseStore<B>, month: Month) -> Self {
        Self {
            store,
            filter: ExpenseFilter::new(CategoryFilter::All, month),
        }
    }

    /// Load the persisted collection, filtering the current month
    pub fn load(backend: B) -> Self {
        Self::new(ExpenseStore::load(backend), Month::current())
    }

    pub fn all(&self) -> &[Expense] {
        self.store.all()
    }

    pub fn store(&self) -> &ExpenseStore<B> {
        &self.store
    }

    pub fn filter(&self) -> ExpenseFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ExpenseFilter) {
        self.filter = filter;
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter = self.filter.with_category(category);
    }

    pub fn set_month(&mut self, month: Month) {
        self.filter = self.filter.with_month(month);
    }

    pub fn next_month(&mut self) {
        self.filter = self.filter.next_month();
    }

    pub fn prev_month(&mut self) {
        self.filter = self.filter.prev_month();
    }

    /// The filtered, sorted expenses and their summary
    pub fn view(&self) -> ExpenseView {
        derive_view(self.store.all(), &self.filter)
    }

    /// Find an expense by full UUID or short id
    pub fn find(&self, identifier: &str) -> Option<&Expense> {
        self.store.find(identifier)
    }

    /// Add an already validated draft
    pub fn add(&mut self, draft: ExpenseDraft) -> ExpenseResult<Expense> {
        self.store.add(draft)
    }

    /// Validate raw form input, then add it
    pub fn add_entry(&mut self, entry: NewExpense) -> ExpenseResult<Expense> {
        let draft = entry.validate()?;
        self.add(draft)
    }

    /// Delete by full UUID or short id
    ///
    /// Returns the removed expense, or `None` when nothing matched.
    pub fn delete(&mut self, identifier: &str) -> ExpenseResult<Option<Expense>> {
        let Some(expense) = self.store.find(identifier).cloned() else {
            debug!("No expense matches {identifier:?}");
            return Ok(None);
        };

        if self.store.delete(expense.id)? {
            Ok(Some(expense))
        } else {
            Ok(None)
        }
    }

    /// Encode either the whole collection or the current view as CSV
    pub fn export_csv(&self, filtered: bool) -> ExpenseResult<String> {
        let csv = if filtered {
            let view = self.view();
            if view.expenses.is_empty() {
                return Err(ExpenseError::EmptyExport);
            }
            expenses_to_csv(&view.expenses)
        } else {
            if self.store.is_empty() {
                return Err(ExpenseError::EmptyExport);
            }
            expenses_to_csv(self.store.all())
        };
        Ok(csv)
    }

    /// Decode CSV text and add every valid row
    pub fn import_csv(
        &mut self,
        content: &str,
        fallback_date: NaiveDate,
    ) -> ExpenseResult<Vec<Expense>> {
        let drafts = parse_csv_with_fallback(content, fallback_date);
        if drafts.is_empty() {
            return Err(ExpenseError::NothingToImport);
        }
        self.store.import(drafts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::storage::MemoryBackend;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tracker() -> ExpenseTracker<MemoryBackend> {
        let store = ExpenseStore::load(MemoryBackend::new());
        ExpenseTracker::new(store, Month::new(2025, 3).unwrap())
    }

    fn draft(description: &str, cents: i64, category: Category, d: NaiveDate) -> ExpenseDraft {
        ExpenseDraft::new(description, Money::from_cents(cents), category, d)
    }

    #[test]
    fn test_view_follows_mutations_and_filter() {
        let mut tracker = tracker();
        tracker
            .add(draft("Mercado", 10000, Category::Food, date(2025, 3, 2)))
            .unwrap();
        tracker
            .add(draft("Ônibus", 500, Category::Transport, date(2025, 3, 9)))
            .unwrap();
        tracker
            .add(draft("Cinema", 3000, Category::Entertainment, date(2025, 4, 1)))
            .unwrap();

        let view = tracker.view();
        assert_eq!(view.summary.count, 2);
        assert_eq!(view.expenses[0].description, "Ônibus");

        tracker.set_category(CategoryFilter::Only(Category::Food));
        assert_eq!(tracker.view().summary.total, Money::from_cents(10000));

        tracker.set_category(CategoryFilter::All);
        tracker.next_month();
        let view = tracker.view();
        assert_eq!(view.summary.count, 1);
        assert_eq!(view.expenses[0].description, "Cinema");

        tracker.prev_month();
        tracker.prev_month();
        assert_eq!(tracker.filter().month, Month::new(2025, 2).unwrap());
        assert!(tracker.view().expenses.is_empty());
    }

    #[test]
    fn test_add_entry_validates() {
        let mut tracker = tracker();
        let err = tracker
            .add_entry(NewExpense {
                description: "   ".into(),
                value: "10".into(),
                category: Category::Food,
                date: date(2025, 3, 1),
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert!(tracker.all().is_empty());
        assert_eq!(tracker.store().backend().write_count(), 0);

        let expense = tracker
            .add_entry(NewExpense {
                description: "Farmácia".into(),
                value: "42,90".into(),
                category: Category::Health,
                date: date(2025, 3, 1),
            })
            .unwrap();
        assert_eq!(expense.value, Money::from_cents(4290));
    }

    #[test]
    fn test_delete_by_short_id() {
        let mut tracker = tracker();
        let expense = tracker
            .add(draft("Luz", 12000, Category::Bills, date(2025, 3, 10)))
            .unwrap();

        let removed = tracker.delete(&expense.id.short()).unwrap();
        assert_eq!(removed.map(|e| e.id), Some(expense.id));
        assert!(tracker.all().is_empty());

        let writes = tracker.store().backend().write_count();
        assert!(tracker.delete("exp-00000000").unwrap().is_none());
        assert_eq!(tracker.store().backend().write_count(), writes);
    }

    #[test]
    fn test_export_scope() {
        let mut tracker = tracker();
        assert!(matches!(
            tracker.export_csv(false),
            Err(ExpenseError::EmptyExport)
        ));

        tracker
            .add(draft("Março", 100, Category::Food, date(2025, 3, 5)))
            .unwrap();
        tracker
            .add(draft("Abril", 200, Category::Food, date(2025, 4, 5)))
            .unwrap();

        let full = tracker.export_csv(false).unwrap();
        assert_eq!(full.lines().count(), 3);

        let filtered = tracker.export_csv(true).unwrap();
        assert_eq!(filtered.lines().count(), 2);
        assert!(filtered.contains("\"Março\""));

        tracker.set_month(Month::new(2025, 1).unwrap());
        assert!(matches!(
            tracker.export_csv(true),
            Err(ExpenseError::EmptyExport)
        ));
    }

    #[test]
    fn test_import_csv() {
        let mut tracker = tracker();
        let err = tracker
            .import_csv("Descrição,Valor,Categoria,Data\n", date(2025, 3, 1))
            .unwrap_err();
        assert!(err.is_notice());
        assert_eq!(tracker.store().backend().write_count(), 0);

        let content = "Descrição,Valor,Categoria,Data\n\
                       \"Feira\",\"35,00\",Alimentação,04/03/2025\n\
                       broken\n\
                       \"Livro\",\"60,00\",Educação,sem data";
        let imported = tracker.import_csv(content, date(2025, 3, 20)).unwrap();

        assert_eq!(imported.len(), 2);
        assert_eq!(tracker.store().backend().write_count(), 1);
        assert_eq!(tracker.all()[0].description, "Livro");
        assert_eq!(tracker.all()[0].date, date(2025, 3, 20));
        assert_eq!(tracker.view().summary.total, Money::from_cents(9500));
    }
}
