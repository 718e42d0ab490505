//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that sums and per-category
//! totals are exact. Decimal input from CSV files and the entry form is
//! rounded to the nearest cent on the way in. Addition saturates at the
//! i64 bounds instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Currency symbol used by `Display`
pub const DEFAULT_SYMBOL: &str = "R$";

/// A monetary amount stored as cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // R$ 10,50
    /// assert_eq!(amount.to_csv_decimal(), "10,50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a floating point number of currency units
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Round a decimal amount to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and values outside the i64 cent range.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Parse an amount typed by the user
    ///
    /// Accepts "10.50", "10,50", "10" and an optional leading currency symbol.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_prefix(DEFAULT_SYMBOL)
            .unwrap_or(trimmed)
            .trim()
            .replace(',', ".");

        number
            .parse::<f64>()
            .ok()
            .and_then(Self::from_decimal)
            .ok_or_else(|| MoneyParseError::InvalidFormat(trimmed.to_string()))
    }

    /// CSV form: two decimals, comma separator, no grouping (`1234,56`)
    pub fn to_csv_decimal(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{},{:02}", sign, self.units().abs(), self.cents_part())
    }

    /// pt-BR display with thousands grouping (`R$ 1.234,56`)
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{} {},{:02}",
            sign,
            symbol,
            group_thousands(self.units().unsigned_abs()),
            self.cents_part()
        )
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol(DEFAULT_SYMBOL))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Serde helper persisting Money as a decimal number of currency units
/// (`12.5`) instead of cents.
pub mod as_units {
    use super::Money;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.as_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| D::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "R$ 10,50");
        assert_eq!(Money::from_cents(0).to_string(), "R$ 0,00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-R$ 10,50");
        assert_eq!(Money::from_cents(123456789).to_string(), "R$ 1.234.567,89");
        assert_eq!(Money::from_cents(100000).to_string(), "R$ 1.000,00");
    }

    #[test]
    fn test_csv_decimal() {
        assert_eq!(Money::from_cents(1050).to_csv_decimal(), "10,50");
        assert_eq!(Money::from_cents(5).to_csv_decimal(), "0,05");
        assert_eq!(Money::from_cents(123456).to_csv_decimal(), "1234,56");
        assert_eq!(Money::from_cents(-5).to_csv_decimal(), "-0,05");
    }

    #[test]
    fn test_from_decimal_rounds_to_cents() {
        assert_eq!(Money::from_decimal(12.345).unwrap().cents(), 1235);
        assert_eq!(Money::from_decimal(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_decimal(-3.5).unwrap().cents(), -350);
        assert!(Money::from_decimal(f64::NAN).is_none());
        assert!(Money::from_decimal(f64::INFINITY).is_none());
        assert!(Money::from_decimal(1e300).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("R$ 10,5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("-2").unwrap().cents(), -200);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_addition_saturates() {
        let huge = Money::from_cents(i64::MAX - 10);
        assert_eq!((huge + huge).cents(), i64::MAX);

        let mut acc = Money::from_cents(i64::MIN + 10);
        acc += Money::from_cents(-100);
        assert_eq!(acc.cents(), i64::MIN);
        assert_eq!(acc.to_string(), "-R$ 92.233.720.368.547.758,08");

        let total: Money = vec![huge, huge, Money::from_cents(1)].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_as_units_serde() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            #[serde(with = "as_units")]
            value: Money,
        }

        let json = serde_json::to_string(&Wrapper {
            value: Money::from_cents(1250),
        })
        .unwrap();
        assert_eq!(json, r#"{"value":12.5}"#);

        let back: Wrapper = serde_json::from_str(r#"{"value":19.99}"#).unwrap();
        assert_eq!(back.value.cents(), 1999);
    }
}
