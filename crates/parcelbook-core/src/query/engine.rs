//! Filter-and-select engine: record store + criteria -> ordered ids

use std::cmp::Ordering;

use crate::dataset::{RecordId, RecordStore};
use crate::record::ParcelRecord;

use super::collate::compare_ru;
use super::criteria::FilterCriteria;

/// Filter the store and order the result.
///
/// Ordering: region (Russian collation) unless a region criterion is
/// active, then catalog number ascending for records that have one, then
/// `source_row`, then load position. Records with a parsable number come
/// before records without one inside the same region.
pub fn apply(store: &RecordStore, criteria: &FilterCriteria) -> Vec<RecordId> {
    let mut ids: Vec<RecordId> = store
        .iter()
        .filter(|(_, record)| criteria.matches(record))
        .map(|(id, _)| id)
        .collect();

    let by_region = !criteria.has_region();
    ids.sort_by(|a, b| {
        compare_records(store.record(*a), store.record(*b), by_region).then_with(|| a.cmp(b))
    });

    tracing::debug!(
        matched = ids.len(),
        total = store.len(),
        by_region,
        "apply_filters"
    );
    ids
}

fn compare_records(a: &ParcelRecord, b: &ParcelRecord, by_region: bool) -> Ordering {
    if by_region {
        let region = compare_ru(&a.region.as_text(), &b.region.as_text());
        if region != Ordering::Equal {
            return region;
        }
    }
    tiebreak(a, b)
}

/// Catalog number, then source row. Numbered records precede unnumbered
/// ones whatever their source rows, which keeps the order total.
fn tiebreak(a: &ParcelRecord, b: &ParcelRecord) -> Ordering {
    let by_row = a.source_row.cmp(&b.source_row);
    match (a.sort_number(), b.sort_number()) {
        (Some(x), Some(y)) => x.total_cmp(&y).then(by_row),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => by_row,
    }
}
