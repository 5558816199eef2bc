//! Detail view of a selected parcel
//!
//! [`DetailView::build`] turns a record, its note, and the loaded store
//! into display-ready values. Nothing here touches I/O.

pub mod draft;
pub mod format;

use serde::Serialize;

use crate::config::{CatalogConfig, PhotoLink};
use crate::dataset::RecordStore;
use crate::links;
use crate::notes::NoteEntry;
use crate::record::{ParcelField, ParcelRecord};
use crate::usage::{UsageCatalog, UsageEntry};

pub use draft::compose_local_draft;
pub use format::{
    collapse_newlines, display_value, format_amount, format_measure, format_number_ru,
};

/// One labelled attribute line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    #[serde(skip)]
    pub field: ParcelField,
    pub key: &'static str,
    pub label: &'static str,
    pub value: Option<String>,
}

/// Everything the detail panel shows for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    /// Full cadastral string, as the panel title
    pub title: String,
    pub primary_cadastral: String,
    pub rows: Vec<DetailRow>,
    /// Position among records sharing the raw cadastral string
    pub match_label: Option<String>,
    pub cadastral_raw: Option<String>,
    pub usage_decoded: Vec<UsageEntry>,
    pub map_link: Option<String>,
    pub photo_link: Option<PhotoLink>,
    pub description: String,
    pub avito_link: String,
}

/// `"{i+1} из {n}"` inside a duplicate group, `"{i+1}"` otherwise
pub fn match_label(match_index: Option<u64>, group_size: usize) -> Option<String> {
    let position = match_index? + 1;
    if group_size > 1 {
        Some(format!("{} из {}", position, group_size))
    } else {
        Some(position.to_string())
    }
}

impl DetailView {
    pub fn build(
        store: &RecordStore,
        record: &ParcelRecord,
        note: Option<&NoteEntry>,
        catalog: &UsageCatalog,
        config: &CatalogConfig,
    ) -> Self {
        let rows = ParcelField::ALL
            .into_iter()
            .filter(|f| *f != ParcelField::CadastralNumber)
            .map(|field| DetailRow {
                field,
                key: field.column(),
                label: field.label(),
                value: display_value(record.field(field), field.kind()),
            })
            .collect();

        let usage_decoded = catalog
            .decode(&record.recommended_usage.as_text())
            .into_iter()
            .cloned()
            .collect();

        let cadastral_raw = Some(record.cadastral_number_raw.as_text()).filter(|s| !s.is_empty());

        Self {
            title: record.cadastral_number.as_text(),
            primary_cadastral: record.primary_cadastral(),
            rows,
            match_label: match_label(record.match_index, store.duplicate_count(record)),
            cadastral_raw,
            usage_decoded,
            map_link: links::map_link(record, &config.map.search_url),
            photo_link: links::photo_link(&config.photo_links, record).cloned(),
            description: note.map(|n| n.description().to_string()).unwrap_or_default(),
            avito_link: note.map(|n| n.avito_link().to_string()).unwrap_or_default(),
        }
    }

    /// Display value of one attribute
    pub fn value(&self, field: ParcelField) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.field == field)
            .and_then(|row| row.value.as_deref())
    }
}
