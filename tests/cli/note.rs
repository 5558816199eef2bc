use std::fs;

use crate::cli::support::{dead_url, respond_once, Catalog};
use predicates::prelude::*;

#[test]
fn test_note_get_empty() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["note", "get", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No note saved for 04:05:010101:12"));
    // The notes file is created on first use
    assert_eq!(catalog.read_notes(), serde_json::json!({}));
}

#[test]
fn test_note_set_then_get() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["note", "set", "#1", "--description", "У реки"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved description for 04:05:010101:12"));

    catalog
        .cmd()
        .args(["note", "set", "04:05:010101:12", "--link", " avito.ru/42 "])
        .assert()
        .success();

    let notes = catalog.read_notes();
    assert_eq!(notes["04:05:010101:12"]["description"], "У реки");
    assert_eq!(notes["04:05:010101:12"]["avito_link"], "avito.ru/42");

    catalog
        .cmd()
        .args(["note", "get", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("У реки"))
        .stdout(predicate::str::contains("Объявление: avito.ru/42"));
}

#[test]
fn test_note_records_header_escapes_cadastral() {
    let catalog = Catalog::with_dataset(
        "number,cadastral_number,region\n1,\"04:05:1:1 \"\"Б\"\"\",Алтай\n",
    );
    catalog
        .cmd()
        .args(["--format", "records", "note", "get", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"mode=note cadastral="04:05:1:1 \"Б\"""#,
        ));

    catalog
        .cmd()
        .args(["--format", "records", "note", "set", "#1", "--description", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"cadastral="04:05:1:1 \"Б\"""#));
}

#[test]
fn test_note_set_uses_primary_identifier() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["note", "set", "#4", "--description", "Два контура"])
        .assert()
        .success();
    assert_eq!(catalog.read_notes()["03:01:000001:6"]["description"], "Два контура");
}

#[test]
fn test_note_set_from_file_keeps_other_fields() {
    let catalog = Catalog::new();
    catalog.write_notes(
        r#"{"04:05:010101:12": {"avito_link": "avito.ru/1", "reviewed": true}}"#,
    );
    fs::write(catalog.path().join("text.txt"), "Строка 1\nСтрока 2").unwrap();

    catalog
        .cmd()
        .args(["note", "set", "#1", "--description-file", "text.txt"])
        .assert()
        .success();

    let notes = catalog.read_notes();
    let entry = &notes["04:05:010101:12"];
    assert_eq!(entry["description"], "Строка 1\nСтрока 2");
    assert_eq!(entry["avito_link"], "avito.ru/1");
    assert_eq!(entry["reviewed"], true);
}

#[test]
fn test_note_set_requires_a_field() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["note", "set", "#1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nothing to save"));
}

#[test]
fn test_note_get_invalid_file_exit_code_3() {
    let catalog = Catalog::new();
    catalog.write_notes("[broken");
    catalog
        .cmd()
        .args(["note", "get", "#1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid notes file"));
}

#[test]
fn test_note_set_json() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "note", "set", "#2", "--link", "avito.ru/7"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "saved");
    assert_eq!(json["cadastral_number"], "04:05:010101:11");
    assert_eq!(json["avito_link"], "avito.ru/7");
}

#[test]
fn test_note_set_fails_when_service_down() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--notes-url", &dead_url(), "note", "set", "#1", "--link", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("note save failed"));
    assert!(!catalog.notes_path().exists());
}

#[test]
fn test_note_get_reads_service() {
    let catalog = Catalog::new();
    let (url, rx) = respond_once(200, r#"{"04:05:010101:11": {"description": "Из сервиса"}}"#);
    catalog
        .cmd()
        .args(["--notes-url", &url, "note", "get", "#2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Из сервиса"));
    assert_eq!(rx.recv().unwrap().request_line, "GET /notes HTTP/1.1");
}
