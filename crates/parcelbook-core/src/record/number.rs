//! Locale-tolerant number parsing
//!
//! Dataset cells and filter inputs arrive as `"1 250,5"`, `"1,000"`,
//! `"12.5"` or plain numbers. Whitespace (including non-breaking spaces)
//! is stripped, and a comma or dot may act as the decimal separator:
//!
//! - both present: the right-most one is the decimal separator
//! - several of the same: grouping separators
//! - a single comma followed by exactly three digits after a non-zero
//!   integer part: grouping (`"1,000"` is one thousand), for money
//!   amounts only
//! - otherwise a single comma or dot is the decimal separator
//!
//! Measurements such as area go through [`parse_decimal`], where a single
//! comma is always decimal (`"2,125"` ha is two and an eighth).

use super::value::FieldValue;

/// Whether a lone comma before three digits groups thousands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grouping {
    Amount,
    Decimal,
}

/// Parse a free-form money amount. Returns `None` when blank or unparsable.
pub fn parse_number(raw: &str) -> Option<f64> {
    parse_with(raw, Grouping::Amount)
}

/// Parse a measurement; a single comma is always the decimal separator
pub fn parse_decimal(raw: &str) -> Option<f64> {
    parse_with(raw, Grouping::Decimal)
}

fn parse_with(raw: &str, grouping: Grouping) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }

    let normalized = normalize_separators(&compact, grouping);
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Numeric view of an auto-typed money cell
pub fn coerce_number(value: &FieldValue) -> Option<f64> {
    coerce_with(value, Grouping::Amount)
}

/// Numeric view of an auto-typed measurement cell
pub fn coerce_decimal(value: &FieldValue) -> Option<f64> {
    coerce_with(value, Grouping::Decimal)
}

fn coerce_with(value: &FieldValue, grouping: Grouping) -> Option<f64> {
    match value {
        FieldValue::Number(n) => Some(*n).filter(|v| v.is_finite()),
        FieldValue::Text(s) => parse_with(s, grouping),
        FieldValue::Bool(_) | FieldValue::Empty => None,
    }
}

fn normalize_separators(s: &str, grouping: Grouping) -> String {
    let last_comma = s.rfind(',');
    let last_dot = s.rfind('.');

    match (last_comma, last_dot) {
        (Some(comma), Some(dot)) => {
            let decimal = if comma > dot { ',' } else { '.' };
            let grouping = if decimal == ',' { '.' } else { ',' };
            s.chars()
                .filter(|c| *c != grouping)
                .map(|c| if c == decimal { '.' } else { c })
                .collect()
        }
        (Some(_), None) => resolve_single_kind(s, ',', grouping),
        (None, Some(_)) => resolve_single_kind(s, '.', grouping),
        (None, None) => s.to_string(),
    }
}

fn resolve_single_kind(s: &str, sep: char, grouping: Grouping) -> String {
    let count = s.matches(sep).count();
    if count > 1 {
        return s.chars().filter(|c| *c != sep).collect();
    }

    if sep == ',' {
        if grouping == Grouping::Decimal {
            return s.replacen(',', ".", 1);
        }
        if let Some((int_part, frac_part)) = s.split_once(',') {
            if is_thousands_group(int_part, frac_part) {
                return format!("{}{}", int_part, frac_part);
            }
        }
        return s.replacen(',', ".", 1);
    }

    s.to_string()
}

fn is_thousands_group(int_part: &str, frac_part: &str) -> bool {
    let unsigned = int_part.strip_prefix(['-', '+']).unwrap_or(int_part);
    frac_part.len() == 3
        && frac_part.chars().all(|c| c.is_ascii_digit())
        && !unsigned.is_empty()
        && unsigned.chars().all(|c| c.is_ascii_digit())
        && !unsigned.trim_start_matches('0').is_empty()
}
