use std::fs;

use tempfile::tempdir;

use crate::dataset::RecordStore;
use crate::error::CatalogError;
use crate::record::FieldValue;

const SAMPLE: &str = "\
cadastral_number,region,article,area_ha,price_per_plot_rub,number,cadastral_number_raw
04:05:1:1,Алтай,A-1,\"2,5\",\"1,000\",2,
04:05:1:2;04:05:1:3,Бурятия,B-7,10,900,1,

04:05:1:4,Алтай,A-2,,,,04:05:1:4 / 04:05:1:5
04:05:1:5,Алтай,A-3,,,,04:05:1:4 / 04:05:1:5
";

fn sample_store() -> RecordStore {
    RecordStore::from_reader(SAMPLE.as_bytes()).unwrap()
}

#[test]
fn test_load_skips_blank_lines_and_types_cells() {
    let store = sample_store();
    assert_eq!(store.len(), 4);

    let (_, first) = store.iter().next().unwrap();
    assert_eq!(first.region.as_text(), "Алтай");
    assert_eq!(first.area_ha, FieldValue::Text("2,5".into()));
    assert_eq!(first.area(), Some(2.5));
    assert_eq!(first.plot_price(), Some(1000.0));
    assert_eq!(first.number, FieldValue::Number(2.0));
    assert_eq!(first.source_row, 1);
}

#[test]
fn test_source_row_is_ordinal_without_column() {
    let store = sample_store();
    let rows: Vec<u64> = store.iter().map(|(_, r)| r.source_row).collect();
    assert_eq!(rows, vec![1, 2, 3, 4]);
}

#[test]
fn test_source_row_column_wins() {
    let csv = "cadastral_number,source_row\n04:1:1:1,40\n04:1:1:2,oops\n";
    let store = RecordStore::from_reader(csv.as_bytes()).unwrap();
    let rows: Vec<u64> = store.iter().map(|(_, r)| r.source_row).collect();
    assert_eq!(rows, vec![40, 2]);
}

#[test]
fn test_match_index_derived_from_raw_cadastral() {
    let store = sample_store();
    let records: Vec<_> = store.iter().map(|(_, r)| r).collect();

    assert_eq!(records[2].match_index, Some(0));
    assert_eq!(records[3].match_index, Some(1));
    assert_eq!(store.duplicate_count(records[2]), 2);
    assert_eq!(store.duplicate_count(records[0]), 1);
}

#[test]
fn test_match_index_column_is_kept() {
    let csv = "cadastral_number,match_index\n04:1:1:1,3\n";
    let store = RecordStore::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(store.iter().next().unwrap().1.match_index, Some(3));
}

#[test]
fn test_regions_sorted_and_unique() {
    let store = sample_store();
    assert_eq!(store.regions(), vec!["Алтай", "Бурятия"]);
}

#[test]
fn test_resolve_selectors() {
    let store = sample_store();

    let by_row = store.resolve("#2").unwrap();
    assert_eq!(store.record(by_row).article.as_text(), "B-7");

    let by_primary = store.resolve("04:05:1:2").unwrap();
    assert_eq!(by_primary, by_row);

    let by_full = store.resolve("04:05:1:2;04:05:1:3").unwrap();
    assert_eq!(by_full, by_row);

    assert!(matches!(
        store.resolve("99:99"),
        Err(CatalogError::RecordNotFound { .. })
    ));
    assert!(matches!(
        store.resolve("#abc"),
        Err(CatalogError::InvalidValue { .. })
    ));
}

#[test]
fn test_missing_dataset_file() {
    let dir = tempdir().unwrap();
    let err = RecordStore::from_csv_path(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, CatalogError::DatasetNotFound { .. }));
}

#[test]
fn test_load_from_path_with_bom() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("all_regions.csv");
    fs::write(&path, "\u{feff}region,cadastral_number\nАлтай,04:1:1:1\n").unwrap();

    let store = RecordStore::from_csv_path(&path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.iter().next().unwrap().1.region.as_text(), "Алтай");
}
