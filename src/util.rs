use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::LedgerError;

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` with `"₹"` → `"₹1,234,567.89"`
pub(crate) fn format_amount(val: Decimal, symbol: &str) -> String {
    let sign = if val < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{symbol}{}", group_thousands(val.abs()))
}

/// Like [`format_amount`] but always carries a sign; zero is `+`.
pub(crate) fn format_signed_amount(val: Decimal, symbol: &str) -> String {
    if val < Decimal::ZERO {
        format_amount(val, symbol)
    } else {
        format!("+{}", format_amount(val, symbol))
    }
}

/// One decimal place, e.g. `50` → `"50.0%"`.
pub(crate) fn format_percent(val: Decimal) -> String {
    let rounded = val.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

/// e.g. `50` → `"+50.0%"`, `-12.34` → `"-12.3%"`.
pub(crate) fn format_signed_percent(val: Decimal) -> String {
    if val < Decimal::ZERO {
        format_percent(val)
    } else {
        format!("+{}", format_percent(val))
    }
}

fn group_thousands(abs: Decimal) -> String {
    let rounded = abs.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{rounded:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    format!("{with_commas}.{dec_part}")
}

/// Parse a user-entered amount, tolerating the currency `symbol` and `,`
/// thousand separators, e.g. `"₹1,250.50"` → `1250.50`. Anything else that
/// is not part of a plain decimal number is rejected.
pub(crate) fn parse_amount(s: &str, symbol: &str) -> Result<Decimal, LedgerError> {
    let invalid = || LedgerError::Validation(format!("invalid amount '{}'", s.trim()));

    let mut text = s.trim();
    let sign = match text.chars().next() {
        Some(c @ ('-' | '+')) => {
            text = &text[1..];
            Some(c)
        }
        _ => None,
    };
    if !symbol.is_empty() {
        text = text.strip_prefix(symbol).unwrap_or(text);
    }
    let text = text.trim_start();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text, None),
    };
    let digits_only = int_part.chars().all(|c| c.is_ascii_digit() || c == ',')
        && frac_part.map_or(true, |f| f.chars().all(|c| c.is_ascii_digit()));
    if !digits_only || !valid_grouping(int_part) {
        return Err(invalid());
    }
    let mut cleaned: String = sign.into_iter().collect();
    cleaned.extend(int_part.chars().filter(|c| *c != ','));
    if let Some(frac) = frac_part {
        cleaned.push('.');
        cleaned.push_str(frac);
    }
    Decimal::from_str(&cleaned).map_err(|_| invalid())
}

/// `1234` and `1,234` are fine; `1,5` and `12,34,567` are not.
fn valid_grouping(int_part: &str) -> bool {
    if !int_part.contains(',') {
        return true;
    }
    let mut groups = int_part.split(',');
    let first_ok = groups.next().is_some_and(|g| (1..=3).contains(&g.len()));
    first_ok && groups.all(|g| g.len() == 3)
}

/// Parse a calendar date, `YYYY-MM-DD` or `YYYY/MM/DD`.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, LedgerError> {
    let trimmed = s.trim();
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| LedgerError::Validation(format!("invalid date '{trimmed}', expected YYYY-MM-DD")))
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

#[cfg(test)]
#[path = "util_tests.rs"]
mod tests;
