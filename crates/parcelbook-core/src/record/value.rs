//! Auto-typed dataset cell values

use serde::{Deserialize, Serialize};

/// A single dataset cell after auto-typing.
///
/// Numeric-looking cells become `Number`, `true`/`false` become `Bool`,
/// blank cells become `Empty`, and everything else stays `Text` as written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Auto-type a raw cell.
    ///
    /// Only plain decimal literals (optional sign, digits, a single dot,
    /// optional exponent) are typed as numbers; `"1,000"` or `"1 000"`
    /// stay text and are interpreted later by the locale-tolerant parser.
    pub fn from_cell(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Empty;
        }
        match trimmed {
            "true" | "TRUE" => return FieldValue::Bool(true),
            "false" | "FALSE" => return FieldValue::Bool(false),
            _ => {}
        }
        if is_plain_decimal(trimmed) {
            if let Ok(value) = trimmed.parse::<f64>() {
                if value.is_finite() {
                    return FieldValue::Number(value);
                }
            }
        }
        FieldValue::Text(raw.to_string())
    }

    /// Whether the value carries anything worth showing
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Empty => false,
            FieldValue::Bool(_) => true,
            FieldValue::Number(n) => !n.is_nan(),
            FieldValue::Text(s) => !s.trim().is_empty(),
        }
    }

    /// Trimmed textual form; empty string when absent
    pub fn as_text(&self) -> String {
        self.raw_text().trim().to_string()
    }

    /// Untrimmed textual form, as the value was written
    pub fn raw_text(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(raw: &str) -> Self {
        FieldValue::from_cell(raw)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

fn is_plain_decimal(s: &str) -> bool {
    let body = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body, None),
    };

    let mut parts = mantissa.splitn(2, '.');
    let int_part = parts.next().unwrap_or_default();
    let frac_part = parts.next();
    let digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());

    let mantissa_ok = match frac_part {
        Some(frac) => {
            digits(int_part) && digits(frac) && !(int_part.is_empty() && frac.is_empty())
        }
        None => !int_part.is_empty() && digits(int_part),
    };

    let exponent_ok = match exponent {
        Some(exp) => {
            let exp = exp.strip_prefix(['-', '+']).unwrap_or(exp);
            !exp.is_empty() && digits(exp)
        }
        None => true,
    };

    mantissa_ok && exponent_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_typing() {
        assert_eq!(FieldValue::from_cell(""), FieldValue::Empty);
        assert_eq!(FieldValue::from_cell("   "), FieldValue::Empty);
        assert_eq!(FieldValue::from_cell("900"), FieldValue::Number(900.0));
        assert_eq!(FieldValue::from_cell("-1.5"), FieldValue::Number(-1.5));
        assert_eq!(FieldValue::from_cell("2e3"), FieldValue::Number(2000.0));
        assert_eq!(FieldValue::from_cell("TRUE"), FieldValue::Bool(true));
        assert_eq!(
            FieldValue::from_cell("1,000"),
            FieldValue::Text("1,000".to_string())
        );
        assert_eq!(
            FieldValue::from_cell("04:05:010203:12"),
            FieldValue::Text("04:05:010203:12".to_string())
        );
        assert_eq!(FieldValue::from_cell("inf"), FieldValue::Text("inf".into()));
    }

    #[test]
    fn test_text_forms() {
        assert_eq!(FieldValue::Number(1000.0).as_text(), "1000");
        assert_eq!(FieldValue::Number(2.25).as_text(), "2.25");
        assert_eq!(FieldValue::Text("  Алтай ".into()).as_text(), "Алтай");
        assert_eq!(FieldValue::Text("  Алтай ".into()).raw_text(), "  Алтай ");
        assert_eq!(FieldValue::Empty.as_text(), "");
    }

    #[test]
    fn test_presence() {
        assert!(!FieldValue::Empty.is_present());
        assert!(!FieldValue::Text(" ".into()).is_present());
        assert!(FieldValue::Bool(false).is_present());
        assert!(FieldValue::Number(0.0).is_present());
    }

    #[test]
    fn test_serializes_untagged() {
        let values = vec![
            FieldValue::Empty,
            FieldValue::Bool(true),
            FieldValue::Number(1.5),
            FieldValue::Text("x".into()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,true,1.5,"x"]"#);
    }
}
