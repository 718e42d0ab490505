//! Expense model
//!
//! An `Expense` is created once (by user entry or CSV import) and never
//! mutated afterwards. An `ExpenseDraft` is the same record before it has an
//! id and a creation timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::ExpenseId;
use super::money::{self, Money};
use crate::error::{ExpenseError, ExpenseResult};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, never reused
    pub id: ExpenseId,

    pub description: String,

    /// Positive amount for entered records
    #[serde(with = "money::as_units")]
    pub value: Money,

    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Category,

    /// Calendar date the expense belongs to
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,

    /// Bookkeeping only; never used for filtering
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Accept a draft, assigning a fresh id and the current time
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        Self::from_draft_at(draft, Utc::now())
    }

    pub fn from_draft_at(draft: ExpenseDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ExpenseId::new(),
            description: draft.description,
            value: draft.value,
            category: draft.category,
            date: draft.date,
            created_at,
        }
    }

    /// The draft fields of this expense
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            description: self.description.clone(),
            value: self.value,
            category: self.category,
            date: self.date,
        }
    }
}

/// An expense pending acceptance into the store
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub description: String,
    pub value: Money,
    pub category: Category,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn new(
        description: impl Into<String>,
        value: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            value,
            category,
            date,
        }
    }
}

/// Raw values from the entry form, before validation
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub description: String,
    pub value: String,
    pub category: Category,
    pub date: NaiveDate,
}

impl NewExpense {
    /// Validate the raw entry and turn it into a draft
    ///
    /// Rejects a description that is empty after trimming and a value that
    /// is not a positive number.
    pub fn validate(self) -> ExpenseResult<ExpenseDraft> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ExpenseError::Validation(
                "Description cannot be empty".into(),
            ));
        }

        let value = Money::parse(&self.value)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;
        if !value.is_positive() {
            return Err(ExpenseError::Validation(format!(
                "Value must be greater than zero, got '{}'",
                self.value.trim()
            )));
        }

        Ok(ExpenseDraft::new(description, value, self.category, self.date))
    }
}

/// Unknown category keys in persisted data fall back to `Other`
fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    Ok(Category::from_key(&key).unwrap_or_default())
}

/// Dates are written as `YYYY-MM-DD`. Full RFC 3339 timestamps, as stored by
/// older browser-based versions, are read back as the local calendar date.
mod calendar_date {
    use chrono::{DateTime, Local, NaiveDate};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&text, FORMAT) {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Local).date_naive())
            .map_err(|_| D::Error::custom(format!("invalid date: '{}'", text)))
    }
}
