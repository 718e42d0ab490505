//! Filtered expense view
//!
//! Derives the visible subset of expenses for a month and category filter,
//! plus the totals and category breakdown shown next to it. Everything here
//! is a pure function of its inputs; callers recompute whenever the
//! collection or the filter changes.

use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Expense, Money, Month};

/// Number of categories reported in the breakdown
pub const TOP_CATEGORY_LIMIT: usize = 4;

/// Category part of the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category
    #[default]
    All,
    /// A single category
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "Todas categorias"),
            Self::Only(category) => write!(f, "{}", category.label()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    /// `all` or `todas` select everything; otherwise a category key or label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todas" | "todas categorias" => Ok(Self::All),
            _ => s.parse::<Category>().map(Self::Only),
        }
    }
}

/// Active filter: a category selection and a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub category: CategoryFilter,
    pub month: Month,
}

impl ExpenseFilter {
    pub fn new(category: CategoryFilter, month: Month) -> Self {
        Self { category, month }
    }

    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self { category, ..self }
    }

    pub fn with_month(self, month: Month) -> Self {
        Self { month, ..self }
    }

    pub fn next_month(self) -> Self {
        self.with_month(self.month.next())
    }

    pub fn prev_month(self) -> Self {
        self.with_month(self.month.prev())
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        self.category.matches(expense.category) && self.month.contains(expense.date)
    }
}

impl Default for ExpenseFilter {
    /// All categories, current month
    fn default() -> Self {
        Self::new(CategoryFilter::All, Month::current())
    }
}

/// One category's share of the filtered total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Percentage of the filtered total; 0 unless that total is positive
    pub percentage: f64,
}

/// Totals over a filtered set of expenses
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub total: Money,
    pub count: usize,
    /// Largest categories first, at most [`TOP_CATEGORY_LIMIT`]
    pub top_categories: Vec<CategoryShare>,
}

/// The filtered, sorted expenses and their summary
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseView {
    pub filter: ExpenseFilter,
    pub expenses: Vec<Expense>,
    pub summary: ExpenseSummary,
}

/// Derive the view for `filter` from the full collection
pub fn derive_view(all: &[Expense], filter: &ExpenseFilter) -> ExpenseView {
    let expenses = filter_expenses(all, filter);
    let summary = summarize(&expenses);
    ExpenseView {
        filter: *filter,
        expenses,
        summary,
    }
}

/// Expenses matching the filter, most recent date first
///
/// Expenses sharing a date keep their relative order.
pub fn filter_expenses(all: &[Expense], filter: &ExpenseFilter) -> Vec<Expense> {
    let mut matching: Vec<Expense> = all.iter().filter(|e| filter.matches(e)).cloned().collect();
    matching.sort_by(|a, b| b.date.cmp(&a.date));
    matching
}

/// Total, count and top categories of a set of expenses
pub fn summarize(expenses: &[Expense]) -> ExpenseSummary {
    let total: Money = expenses.iter().map(|e| e.value).sum();

    // First-seen order, so equal totals keep a stable ranking
    let mut by_category: Vec<(Category, Money)> = Vec::new();
    for expense in expenses {
        match by_category.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, sum)) => *sum += expense.value,
            None => by_category.push((expense.category, expense.value)),
        }
    }
    by_category.sort_by(|a, b| b.1.cmp(&a.1));

    let top_categories = by_category
        .into_iter()
        .take(TOP_CATEGORY_LIMIT)
        .map(|(category, sum)| CategoryShare {
            category,
            total: sum,
            percentage: percentage_of(sum, total),
        })
        .collect();

    ExpenseSummary {
        total,
        count: expenses.len(),
        top_categories,
    }
}

fn percentage_of(part: Money, total: Money) -> f64 {
    if total.is_positive() {
        (part.cents() as f64 * 100.0) / total.cents() as f64
    } else {
        0.0
    }
}

impl ExpenseView {
    /// Format the summary block for terminal display
    pub fn format_summary(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        let summary = &self.summary;

        output.push_str(&format!(
            "{} · {}\n",
            self.filter.month.display_name(),
            self.filter.category
        ));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!(
            "Total:    {}\n",
            summary.total.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("Records:  {}\n\n", summary.count));

        if summary.top_categories.is_empty() {
            output.push_str("No data for this period.\n");
            return output;
        }

        output.push_str("By category:\n");
        for share in &summary.top_categories {
            output.push_str(&format!(
                "  {} {:<16} {:>14} {:>4.0}%\n",
                share.category.icon(),
                share.category.label(),
                share.total.format_with_symbol(currency_symbol),
                share.percentage
            ));
        }

        output
    }
}
