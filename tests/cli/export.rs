use std::fs;

use crate::cli::support::Catalog;
use chrono::Local;
use predicates::prelude::*;

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[test]
fn test_export_rtf_to_output_dir() {
    let catalog = Catalog::new();
    catalog.write_notes(r#"{"04:05:010101:12": {"description": "Сохранённое"}}"#);

    catalog
        .cmd()
        .args(["export", "#1", "--output", "reports"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported rtf report to"));

    let path = catalog
        .path()
        .join("reports")
        .join(format!("parcel_04_05_010101_12_{}.rtf", today()));
    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with("{\\rtf1"));
}

#[test]
fn test_export_print_page_with_draft() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["export", "#3", "--kind", "print", "--draft", "Черновик для печати"])
        .assert()
        .success();

    let path = catalog
        .path()
        .join(format!("parcel_03_01_000001_5_{}.html", today()));
    let page = fs::read_to_string(path).unwrap();
    assert!(page.contains("Участок 03:01:000001:5"));
    assert!(page.contains("Черновик для печати"));
}

#[test]
fn test_export_pdf_alias_and_json() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "export", "#4", "--kind", "pdf"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "exported");
    assert_eq!(json["kind"], "print");
    assert!(json["path"]
        .as_str()
        .unwrap()
        .ends_with(&format!("parcel_03_01_000001_6_{}.html", today())));
}

#[test]
fn test_export_unknown_kind() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["export", "#1", "--kind", "docx"])
        .assert()
        .code(2);
}

#[test]
fn test_export_unknown_record() {
    let catalog = Catalog::new();
    catalog.cmd().args(["export", "#99"]).assert().code(3);
}
