//! CSV import
//!
//! Decodes CSV text into expense drafts. Decoding never fails: malformed rows
//! are skipped one by one, unknown categories become `Outros`, and dates that
//! cannot be read fall back to a caller-supplied date.

use std::path::Path;

use chrono::{DateTime, Days, Local, NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::csv::BOM;
use crate::models::{Category, ExpenseDraft, Money};

/// Layouts tried, in order, for dates that are not `dd/mm/yyyy`
const FALLBACK_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%d.%m.%Y"];
const FALLBACK_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Decode CSV text, substituting today's date for unreadable dates
pub fn parse_csv(content: &str) -> Vec<ExpenseDraft> {
    parse_csv_with_fallback(content, Local::now().date_naive())
}

/// Decode CSV text into drafts, in row order
///
/// The first non-blank line is a header and is skipped without inspection.
/// Fewer than two non-blank lines yields an empty list.
pub fn parse_csv_with_fallback(content: &str, fallback_date: NaiveDate) -> Vec<ExpenseDraft> {
    let lines: Vec<&str> = content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Vec::new();
    }

    lines[1..]
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let draft = parse_row(line, fallback_date);
            if draft.is_none() {
                debug!("Skipping malformed CSV row {}: {:?}", idx + 2, line);
            }
            draft
        })
        .collect()
}

fn parse_row(line: &str, fallback_date: NaiveDate) -> Option<ExpenseDraft> {
    let fields = split_fields(line);
    let columns = RowColumns::from_fields(&fields)?;

    let value = parse_amount(&columns.value)?;
    let category = Category::from_label(columns.category).unwrap_or_default();
    let date = parse_date(columns.date).unwrap_or(fallback_date);

    Some(ExpenseDraft::new(
        columns.description.trim(),
        value,
        category,
        date,
    ))
}

/// Split one line into fields; quoted fields may hold commas and `""`
fn split_fields(line: &str) -> Vec<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        Some(Err(e)) => {
            debug!("Unreadable CSV line: {e}");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// The four logical columns of a data row
struct RowColumns<'a> {
    description: &'a str,
    value: String,
    category: &'a str,
    date: &'a str,
}

impl<'a> RowColumns<'a> {
    /// Rows need at least four fields. An unquoted comma-decimal value
    /// (`25,90`) arrives split in two; it is recognised by an all-digit third
    /// field on a row that is wider than four.
    fn from_fields(fields: &'a [String]) -> Option<Self> {
        if fields.len() < 4 {
            return None;
        }

        if fields.len() >= 5 && is_fraction_digits(&fields[2]) {
            Some(Self {
                description: &fields[0],
                value: format!("{},{}", fields[1], fields[2]),
                category: &fields[3],
                date: &fields[4],
            })
        } else {
            Some(Self {
                description: &fields[0],
                value: fields[1].clone(),
                category: &fields[2],
                date: &fields[3],
            })
        }
    }
}

fn is_fraction_digits(field: &str) -> bool {
    let field = field.trim();
    !field.is_empty() && field.chars().all(|c| c.is_ascii_digit())
}

/// Parse a value column
///
/// The first comma becomes the decimal point, every character other than a
/// digit, `-` or `.` is dropped, and the longest leading number is read.
fn parse_amount(text: &str) -> Option<Money> {
    let cleaned: String = text
        .replacen(',', ".", 1)
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();

    leading_number(&cleaned)
        .and_then(|n| n.parse::<f64>().ok())
        .and_then(Money::from_decimal)
}

/// Longest prefix of the form `-?digits(.digits)?` holding at least one digit
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            digits += 1;
        }
        if digits > 0 {
            end = frac_end;
        }
    }

    (digits > 0).then(|| s[..end].trim_end_matches('.'))
}

/// Parse a date column
///
/// `dd/mm/yyyy` first, then a few free-form layouts. Three numeric parts
/// that are not a real calendar date roll over the way a lenient calendar
/// does (`31/02/2025` is `03/03/2025`, day `0` is the last day of the
/// previous month).
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    let numeric = numeric_day_month_year(text);
    if let Some(date) = numeric.and_then(|(d, m, y)| calendar_date(d, m, y)) {
        return Some(date);
    }

    parse_free_form_date(text).or_else(|| numeric.and_then(|(d, m, y)| rolled_over_date(d, m, y)))
}

fn calendar_date(day: i64, month: i64, year: i64) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )
}

/// Split `d/m/y` into three integers
fn numeric_day_month_year(text: &str) -> Option<(i64, i64, i64)> {
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let day = parts[0].trim().parse::<i64>().ok()?;
    let month = parts[1].trim().parse::<i64>().ok()?;
    let year = parts[2].trim().parse::<i64>().ok()?;
    Some((day, month, year))
}

/// Month and day overflow carry into the following month and year
fn rolled_over_date(day: i64, month: i64, year: i64) -> Option<NaiveDate> {
    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let first = NaiveDate::from_ymd_opt(
        i32::try_from(months.div_euclid(12)).ok()?,
        u32::try_from(months.rem_euclid(12) + 1).ok()?,
        1,
    )?;

    let offset = day.checked_sub(1)?;
    if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

fn parse_free_form_date(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    FALLBACK_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            FALLBACK_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

/// Read an import file as text, dropping a leading byte-order marker
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> ExpenseResult<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ExpenseError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;

    if let Some(stripped) = content.strip_prefix(BOM) {
        return Ok(stripped.to_string());
    }
    Ok(content)
}
