//! Per-field coercion of raw CSV cells.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

static DATE_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("date shape pattern is valid"));

#[derive(Debug, Error)]
pub enum CoerceError {
    #[error("value is empty")]
    Empty,
    #[error("not a decimal number ({0})")]
    Decimal(#[from] rust_decimal::Error),
    #[error("expected MM/DD/YYYY")]
    DateShape,
    #[error("not a calendar date ({0})")]
    Date(#[from] chrono::ParseError),
}

/// Debit flag cells are exactly "D" (case-sensitive) after trimming.
pub fn parse_debit_flag(raw: &str) -> bool {
    raw.trim() == "D"
}

/// Parse a money cell like "$1,234.56" or "(42.10)".
///
/// Parentheses only get stripped; the sign of a debit comes from `is_debit`,
/// which forces the result negative.
pub fn parse_amount(raw: &str, is_debit: bool) -> Result<Decimal, CoerceError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | '(' | ')' | ',') && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(CoerceError::Empty);
    }

    let value = Decimal::from_str(&cleaned)?;
    Ok(if is_debit { -value.abs() } else { value })
}

/// Parse `MM/DD/YYYY` (month and day may be unpadded, the year may not).
pub fn parse_posted_date(raw: &str) -> Result<NaiveDate, CoerceError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(CoerceError::Empty);
    }
    if !DATE_SHAPE_RE.is_match(s) {
        return Err(CoerceError::DateShape);
    }
    Ok(NaiveDate::parse_from_str(s, "%m/%d/%Y")?)
}

/// Strip surrounding whitespace and every `"` from an identifier cell.
pub fn clean_unique_id(raw: &str) -> String {
    raw.replace('"', "").trim().to_string()
}
