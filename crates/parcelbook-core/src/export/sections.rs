//! Ordered labelled sections shared by every export format

use serde::Serialize;

use crate::detail::format::{format_amount, format_measure};
use crate::links;
use crate::notes::NoteEntry;
use crate::record::{FieldValue, ParcelRecord};
use crate::usage::UsageCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub label: String,
    pub value: String,
}

/// Skips empty values
#[derive(Default)]
struct SectionList(Vec<Section>);

impl SectionList {
    fn push(&mut self, label: &str, value: impl AsRef<str>) {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return;
        }
        self.0.push(Section {
            label: label.to_string(),
            value: value.to_string(),
        });
    }

    fn push_field(&mut self, label: &str, value: &FieldValue) {
        self.push(label, value.as_text());
    }

    fn push_measure(&mut self, label: &str, value: &FieldValue) {
        if value.is_present() {
            self.push(label, format_measure(value));
        }
    }

    fn push_amount(&mut self, label: &str, value: &FieldValue) {
        if value.is_present() {
            self.push(label, format_amount(value));
        }
    }
}

fn discount_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) if !n.is_nan() => format!("{}%", n),
        other => other.as_text(),
    }
}

fn wholesale_text(value: &FieldValue) -> String {
    const WHOLESALE: &str = "Только опт";
    const RETAIL: &str = "Розница возможна";
    match value {
        FieldValue::Bool(true) => WHOLESALE.to_string(),
        FieldValue::Bool(false) => RETAIL.to_string(),
        other => {
            let text = other.as_text();
            match text.to_lowercase().as_str() {
                "1" | "да" | "yes" | "true" => WHOLESALE.to_string(),
                "0" | "нет" | "no" | "false" => RETAIL.to_string(),
                _ => text,
            }
        }
    }
}

/// Build the export section list.
///
/// Order: region, article, area, plot price, sotka price, discount,
/// wholesale, land use, recommended usage, decoded usage, service notes,
/// context, recommendations, location, best use, owner, partner, right
/// date, balance value, listing link, public map link, draft text.
pub fn collect_sections(
    record: &ParcelRecord,
    note: Option<&NoteEntry>,
    draft: &str,
    catalog: &UsageCatalog,
    map_template: &str,
) -> Vec<Section> {
    let mut sections = SectionList::default();

    sections.push_field("Регион", &record.region);
    sections.push_field("Артикул", &record.article);
    sections.push_measure("Площадь, га", &record.area_ha);
    sections.push_amount("Цена за участок, руб", &record.price_per_plot_rub);
    sections.push_amount("Цена за сотку, руб", &record.price_per_sotka_rub);
    if record.discount_limit_percent.is_present() {
        sections.push(
            "Допустимая скидка",
            discount_text(&record.discount_limit_percent),
        );
    }
    if record.wholesale_only.is_present() {
        sections.push("Продажа (опт)", wholesale_text(&record.wholesale_only));
    }
    sections.push_field("ВРИ / Категория", &record.land_use);

    let usage = record.recommended_usage.as_text();
    sections.push("Рекомендованное назначение", &usage);
    let decoded = catalog.decode_text(&usage);
    if decoded != usage {
        sections.push("Расшифровка назначений", decoded);
    }

    sections.push_field("Служебные отметки", &record.service_notes);
    sections.push_field("Контекст", &record.context);
    sections.push_field("Рекомендации", &record.recommendations);
    sections.push_field("Описание расположения", &record.location_description);
    sections.push_field("Наилучшее использование", &record.best_use);
    sections.push_field("Собственник", &record.owner);
    sections.push_field("Партнёр", &record.partner);
    sections.push_field("Дата права", &record.right_date);
    sections.push_amount("Балансовая стоимость", &record.balance_value);

    if let Some(note) = note {
        sections.push("Ссылка Авито", note.avito_link());
    }
    if let Some(url) = links::map_link(record, map_template) {
        sections.push("Публичная карта", url);
    }
    sections.push("Черновик описания", draft);

    sections.0
}
