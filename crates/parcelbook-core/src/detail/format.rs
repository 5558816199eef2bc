//! Display formatting for field values

use crate::record::{coerce_decimal, coerce_number, FieldKind, FieldValue};

/// Digit group separator used by ru-RU number formatting
pub const GROUP_SEPARATOR: char = '\u{a0}';

/// Format a number the ru-RU way: non-breaking-space thousands grouping,
/// comma decimal separator, at most three fraction digits.
///
/// Non-finite values format as an empty string.
pub fn format_number_ru(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if value < 0.0 && (int_part.bytes().any(|b| b != b'0') || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Locale-formatted number for a cell; unparsable cells keep their text
pub fn format_amount(value: &FieldValue) -> String {
    match coerce_number(value) {
        Some(n) => format_number_ru(n),
        None => value.as_text(),
    }
}

/// Locale-formatted measurement (area); a lone comma stays decimal
pub fn format_measure(value: &FieldValue) -> String {
    match coerce_decimal(value) {
        Some(n) => format_number_ru(n),
        None => value.as_text(),
    }
}

/// Collapse runs of line breaks into one, normalising CR/CRLF first
pub fn collapse_newlines(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(normalized.len());
    let mut previous_newline = false;
    for ch in normalized.chars() {
        if ch == '\n' {
            if previous_newline {
                continue;
            }
            previous_newline = true;
        } else {
            previous_newline = false;
        }
        out.push(ch);
    }
    out
}

/// Render a cell for display according to its field kind.
///
/// Returns `None` for blank values.
pub fn display_value(value: &FieldValue, kind: FieldKind) -> Option<String> {
    let text = match kind {
        FieldKind::Number => format_amount(value),
        FieldKind::LongText => collapse_newlines(value.as_text().as_str()),
        FieldKind::Text => value.as_text(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
