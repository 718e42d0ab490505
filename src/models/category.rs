//! Expense category taxonomy
//!
//! The set of categories is closed and fixed at compile time. Each category
//! carries a pt-BR display label and an icon glyph. The label doubles as the
//! category token in CSV files, so it must stay stable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an expense
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Health,
    Education,
    Bills,
    Shopping,
    #[default]
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 8] = [
        Self::Food,
        Self::Transport,
        Self::Entertainment,
        Self::Health,
        Self::Education,
        Self::Bills,
        Self::Shopping,
        Self::Other,
    ];

    /// Internal key, as persisted
    pub fn key(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::Education => "education",
            Self::Bills => "bills",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }

    /// Display label, also the CSV token
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Alimentação",
            Self::Transport => "Transporte",
            Self::Entertainment => "Entretenimento",
            Self::Health => "Saúde",
            Self::Education => "Educação",
            Self::Bills => "Contas",
            Self::Shopping => "Compras",
            Self::Other => "Outros",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚗",
            Self::Entertainment => "🎬",
            Self::Health => "💊",
            Self::Education => "📚",
            Self::Bills => "📄",
            Self::Shopping => "🛒",
            Self::Other => "📦",
        }
    }

    /// Look up a category by its label, ignoring case and surrounding whitespace
    pub fn from_label(label: &str) -> Option<Self> {
        let needle = label.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == needle)
    }

    /// Look up a category by its internal key, ignoring case
    pub fn from_key(key: &str) -> Option<Self> {
        let needle = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.key() == needle)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts either the internal key (`food`) or the label (`Alimentação`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
            .or_else(|| Self::from_label(s))
            .ok_or_else(|| format!("Unknown category: '{}'", s.trim()))
    }
}
