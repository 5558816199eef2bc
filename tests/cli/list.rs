use std::time::Duration;

use crate::cli::support::{dead_url, many_parcels, respond_once, Catalog};
use predicates::prelude::*;

fn list_json(catalog: &Catalog, args: &[&str]) -> serde_json::Value {
    let output = catalog
        .cmd()
        .args(["--format", "json", "list"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "list failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn rows(json: &serde_json::Value) -> Vec<u64> {
    json["parcels"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["source_row"].as_u64().unwrap())
        .collect()
}

#[test]
fn test_list_orders_by_region_then_number() {
    let catalog = Catalog::new();
    let json = list_json(&catalog, &[]);
    assert_eq!(json["total"], 4);
    assert_eq!(rows(&json), vec![3, 4, 2, 1]);
    assert_eq!(json["has_more"], false);
    // The first record is selected on start
    assert_eq!(json["parcels"][0]["selected"], true);
}

#[test]
fn test_list_does_not_contact_notes_service() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--notes-url", &dead_url(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("04:05:010101:12"))
        .stderr(predicate::str::contains("notes unavailable").not());

    let (url, requests) = respond_once(200, "{}");
    catalog
        .cmd()
        .args(["--notes-url", &url, "list"])
        .assert()
        .success();
    assert!(requests.recv_timeout(Duration::from_millis(200)).is_err());
}

#[test]
fn test_list_region_filter_uses_number_order() {
    let catalog = Catalog::new();
    let json = list_json(&catalog, &["--region", "Республика Алтай"]);
    assert_eq!(rows(&json), vec![2, 1]);
    assert_eq!(json["parcels"][1]["price_per_plot_rub"], 1000.0);
}

#[test]
fn test_list_price_min_reads_grouped_thousands() {
    let catalog = Catalog::new();
    let json = list_json(
        &catalog,
        &["--region", "Республика Алтай", "--price-min", "950"],
    );
    assert_eq!(rows(&json), vec![1]);
}

#[test]
fn test_list_range_excludes_missing_values() {
    let catalog = Catalog::new();
    let json = list_json(&catalog, &["--area-max", "5"]);
    // Row 4 has no area and is excluded once a bound is set
    assert_eq!(rows(&json), vec![3, 1]);
}

#[test]
fn test_list_substring_filters_ignore_case() {
    let catalog = Catalog::new();
    let json = list_json(&catalog, &["--article", "b-"]);
    assert_eq!(rows(&json), vec![3, 4]);

    let json = list_json(&catalog, &["--cadastral", "000001:7"]);
    assert_eq!(rows(&json), vec![4]);
}

#[test]
fn test_list_pages_grow_window() {
    let catalog = Catalog::with_dataset(&many_parcels(17));
    let json = list_json(&catalog, &[]);
    assert_eq!(json["visible"], 15);
    assert_eq!(json["total"], 17);
    assert_eq!(json["has_more"], true);

    let json = list_json(&catalog, &["--pages", "2"]);
    assert_eq!(json["visible"], 17);
    assert_eq!(json["has_more"], false);
}

#[test]
fn test_list_human_output() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--region", "Бурятия"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> #3"))
        .stdout(predicate::str::contains("1\u{a0}500\u{a0}000 руб"))
        .stdout(predicate::str::contains("Showing 2 of 2 (region=Бурятия)"));
}

#[test]
fn test_list_no_results() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--region", "Тыва"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No parcels found"));
}

#[test]
fn test_list_records_format() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--format", "records", "list", "--region", "Бурятия"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H parcelbook=1 records=1 mode=list total=2 visible=2 more=false\n",
        ))
        .stdout(predicate::str::contains(
            "P 3 \"03:01:000001:5\" region=\"Бурятия\" article=\"B-1\" area=1 price=1500000 selected",
        ));
}

#[test]
fn test_list_invalid_bound_is_usage_error() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["list", "--area-min", "много"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--area-min"));
}

#[test]
fn test_list_zero_pages_rejected() {
    let catalog = Catalog::new();
    catalog.cmd().args(["list", "--pages", "0"]).assert().code(2);
}
