//! One-line parcel summaries

use parcelbook_core::detail::{format_amount, format_measure};
use parcelbook_core::format::escape_quotes;
use parcelbook_core::record::{coerce_number, FieldValue, ParcelRecord};
use serde_json::json;

const MISSING: &str = "—";

fn amount_or_dash(value: &FieldValue) -> String {
    if value.is_present() {
        format_amount(value)
    } else {
        MISSING.to_string()
    }
}

fn measure_or_dash(value: &FieldValue) -> String {
    if value.is_present() {
        format_measure(value)
    } else {
        MISSING.to_string()
    }
}

fn text_or_dash(value: &FieldValue) -> String {
    let text = value.as_text();
    if text.is_empty() {
        MISSING.to_string()
    } else {
        text
    }
}

/// Human list row: cadastral number, article, area, price per sotka,
/// price per plot
pub fn parcel_row(record: &ParcelRecord, selected: bool) -> String {
    format!(
        "{} #{:<5} {}  {}  {} га  {} руб/сотка  {} руб",
        if selected { '>' } else { ' ' },
        record.source_row,
        text_or_dash(&record.cadastral_number),
        text_or_dash(&record.article),
        measure_or_dash(&record.area_ha),
        amount_or_dash(&record.price_per_sotka_rub),
        amount_or_dash(&record.price_per_plot_rub),
    )
}

/// `P <source_row> "<cadastral>" region=".." article=".." area=.. price=..`
pub fn print_parcel_record(record: &ParcelRecord, selected: bool) {
    let plain = |value: Option<f64>| match value {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    };
    println!(
        "P {} \"{}\" region=\"{}\" article=\"{}\" area={} price={}{}",
        record.source_row,
        escape_quotes(&record.cadastral_number.as_text()),
        escape_quotes(&record.region.as_text()),
        escape_quotes(&record.article.as_text()),
        plain(record.area()),
        plain(record.plot_price()),
        if selected { " selected" } else { "" },
    );
}

/// Summary object used in JSON list output
pub fn parcel_json(record: &ParcelRecord, selected: bool) -> serde_json::Value {
    json!({
        "source_row": record.source_row,
        "number": coerce_number(&record.number),
        "cadastral_number": record.cadastral_number.as_text(),
        "region": record.region.as_text(),
        "article": record.article.as_text(),
        "area_ha": record.area(),
        "price_per_sotka_rub": coerce_number(&record.price_per_sotka_rub),
        "price_per_plot_rub": record.plot_price(),
        "selected": selected,
    })
}
