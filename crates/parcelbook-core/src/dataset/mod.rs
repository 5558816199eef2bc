//! Record store: the full dataset, read-only after load

mod loader;

use std::collections::HashMap;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::query::collate::compare_ru;
use crate::record::ParcelRecord;

/// Stable identity of a record inside its [`RecordStore`].
///
/// Two ids are equal only when they point at the same loaded row, which is
/// what selection survival compares on (never field contents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(usize);

impl RecordId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered, immutable sequence of parcel records
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<ParcelRecord>,
    duplicate_counts: HashMap<String, usize>,
}

impl RecordStore {
    /// Build a store from already-parsed records.
    ///
    /// Records without a `match_index` get one derived from their position
    /// among records sharing the same raw cadastral string.
    pub fn from_records(mut records: Vec<ParcelRecord>) -> Self {
        let mut duplicate_counts: HashMap<String, usize> = HashMap::new();
        for record in &mut records {
            let key = record.duplicate_key();
            if key.is_empty() {
                continue;
            }
            let seen = duplicate_counts.entry(key).or_insert(0);
            if record.match_index.is_none() {
                record.match_index = Some(*seen as u64);
            }
            *seen += 1;
        }

        Self {
            records,
            duplicate_counts,
        }
    }

    /// Load the dataset from a CSV file with a header row
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CatalogError::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = std::fs::File::open(path)
            .map_err(|e| CatalogError::io_operation("open dataset", path.display(), e))?;
        loader::read_records(file)
            .map(Self::from_records)
            .map_err(|e| match e {
                CatalogError::Csv(err) => CatalogError::InvalidDataset {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                },
                other => other,
            })
    }

    /// Load the dataset from any CSV reader
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        loader::read_records(reader).map(Self::from_records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&ParcelRecord> {
        self.records.get(id.0)
    }

    /// Record behind an id handed out by this store
    pub fn record(&self, id: RecordId) -> &ParcelRecord {
        &self.records[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &ParcelRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (RecordId(i), record))
    }

    /// Sorted unique non-empty regions, for the region picker
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self
            .records
            .iter()
            .map(|r| r.region.as_text())
            .filter(|r| !r.is_empty())
            .collect();
        regions.sort_by(|a, b| compare_ru(a, b));
        regions.dedup();
        regions
    }

    /// How many loaded records share this record's raw cadastral string
    pub fn duplicate_count(&self, record: &ParcelRecord) -> usize {
        let key = record.duplicate_key();
        if key.is_empty() {
            return 0;
        }
        self.duplicate_counts.get(&key).copied().unwrap_or(0)
    }

    /// Find a record by `#<source_row>` or by cadastral number.
    ///
    /// Cadastral selectors match either the full cadastral string or the
    /// primary identifier; the first match in load order wins.
    pub fn resolve(&self, selector: &str) -> Result<RecordId> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Err(CatalogError::UsageError(
                "record selector must not be empty".to_string(),
            ));
        }

        if let Some(row) = selector.strip_prefix('#') {
            let row: u64 = row
                .parse()
                .map_err(|_| CatalogError::invalid_value("source row", selector))?;
            return self
                .iter()
                .find(|(_, r)| r.source_row == row)
                .map(|(id, _)| id)
                .ok_or_else(|| CatalogError::record_not_found(selector));
        }

        self.iter()
            .find(|(_, r)| r.cadastral_number.as_text() == selector)
            .or_else(|| self.iter().find(|(_, r)| r.primary_cadastral() == selector))
            .map(|(id, _)| id)
            .ok_or_else(|| CatalogError::record_not_found(selector))
    }
}

#[cfg(test)]
mod tests;
