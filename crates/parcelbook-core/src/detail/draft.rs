//! Offline template draft for the description editor

use crate::record::ParcelRecord;
use crate::usage::UsageCatalog;

use super::format::format_amount;

fn or_dash(text: String) -> String {
    if text.is_empty() {
        "—".to_string()
    } else {
        text
    }
}

/// Compose a description draft from the record alone.
///
/// Paragraphs: summary line, location, context, recommended usage with
/// decoded scenario blocks, offer prices, service notes. Absent parts are
/// skipped; paragraphs are separated by a blank line.
pub fn compose_local_draft(record: &ParcelRecord, catalog: &UsageCatalog) -> String {
    let mut fragments: Vec<String> = Vec::new();

    fragments.push(format!(
        "Участок {} ({} га) расположен в районе {}.",
        or_dash(record.cadastral_number.as_text()),
        or_dash(record.area_ha.as_text()),
        or_dash(record.region.as_text()),
    ));

    for value in [&record.location_description, &record.context] {
        if value.is_present() {
            fragments.push(value.as_text());
        }
    }

    if record.recommended_usage.is_present() {
        let usage = record.recommended_usage.as_text();
        fragments.push(format!("Рекомендуемое назначение: {}.", usage));

        let blocks: Vec<String> = catalog
            .decode(&usage)
            .into_iter()
            .map(|entry| format!("{}\n{}", entry.title, entry.text))
            .collect();
        if !blocks.is_empty() {
            fragments.push(blocks.join("\n\n"));
        }
    }

    let mut offer = Vec::new();
    if record.price_per_plot_rub.is_present() {
        offer.push(format!(
            "цена за участок {} руб",
            format_amount(&record.price_per_plot_rub)
        ));
    }
    if record.price_per_sotka_rub.is_present() {
        offer.push(format!(
            "стоимость сотки {} руб",
            format_amount(&record.price_per_sotka_rub)
        ));
    }
    if !offer.is_empty() {
        fragments.push(format!("Предложение: {}.", offer.join(", ")));
    }

    if record.service_notes.is_present() {
        fragments.push(format!(
            "Служебные отметки: {}.",
            record.service_notes.as_text()
        ));
    }

    fragments.join("\n\n")
}
