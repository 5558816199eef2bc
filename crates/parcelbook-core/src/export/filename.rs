//! Export file naming

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::warn;

use crate::record::ParcelRecord;

static UNSAFE_RUN: OnceLock<Option<Regex>> = OnceLock::new();

fn unsafe_run() -> Option<&'static Regex> {
    UNSAFE_RUN
        .get_or_init(|| match Regex::new(r"[^0-9A-Za-z]+") {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "Failed to compile filename regex");
                None
            }
        })
        .as_ref()
}

/// Primary cadastral id reduced to `[0-9A-Za-z_]`, or `parcel`
pub fn safe_stem(record: &ParcelRecord) -> String {
    let primary = record.primary_cadastral();
    let replaced = match unsafe_run() {
        Some(re) => re.replace_all(&primary, "_").into_owned(),
        None => primary
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect(),
    };
    let trimmed = replaced.trim_matches('_');
    if trimmed.is_empty() {
        "parcel".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `parcel_{safe}_{YYYY-MM-DD}.{ext}`
pub fn export_filename(record: &ParcelRecord, extension: &str, date: NaiveDate) -> String {
    format!(
        "parcel_{}_{}.{}",
        safe_stem(record),
        date.format("%Y-%m-%d"),
        extension
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ParcelField;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    #[test]
    fn test_filename_from_primary_id() {
        let record = ParcelRecord::default()
            .with(ParcelField::CadastralNumber, "04:05:010101:12; 04:05:010101:13");
        assert_eq!(
            export_filename(&record, "rtf", date()),
            "parcel_04_05_010101_12_2026-03-09.rtf"
        );
    }

    #[test]
    fn test_filename_fallback() {
        assert_eq!(
            export_filename(&ParcelRecord::default(), "html", date()),
            "parcel_parcel_2026-03-09.html"
        );
        let record = ParcelRecord::default().with(ParcelField::CadastralNumber, "—:—");
        assert_eq!(safe_stem(&record), "parcel");
    }
}
