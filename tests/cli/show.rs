use crate::cli::support::{dead_url, respond_once, Catalog};
use predicates::prelude::*;

#[test]
fn test_show_by_source_row() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["show", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("04:05:010101:12\n"))
        .stdout(predicate::str::contains("Регион: Республика Алтай"))
        .stdout(predicate::str::contains("Площадь (га): 2,5"))
        .stdout(predicate::str::contains("Цена за участок (₽): 1\u{a0}000"))
        .stdout(predicate::str::contains("Собственник: —"))
        .stdout(predicate::str::contains("1 — Плюс 1"))
        .stdout(predicate::str::contains("3 — Плюс 3"))
        .stdout(predicate::str::contains(
            "Публичная карта: https://pkk.rosreestr.ru/#/search/04:05:010101:12",
        ))
        .stdout(predicate::str::contains("Описание: —"));
}

#[test]
fn test_show_by_primary_cadastral_with_duplicate_group() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["show", "03:01:000001:6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Совпадение: 1"))
        .stdout(predicate::str::contains(
            "Исходная строка: 03:01:000001:6 / 03:01:000001:7",
        ));
}

#[test]
fn test_show_includes_saved_note() {
    let catalog = Catalog::new();
    catalog.write_notes(
        r#"{"04:05:010101:11": {"description": "Лесной участок", "avito_link": "https://avito.ru/1"}}"#,
    );
    catalog
        .cmd()
        .args(["show", "#2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Лесной участок"))
        .stdout(predicate::str::contains("Объявление: https://avito.ru/1"));
}

#[test]
fn test_show_json() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "show", "#1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["primary_cadastral"], "04:05:010101:12");
    assert_eq!(json["usage_decoded"].as_array().unwrap().len(), 2);
    let region = json["rows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["key"] == "region")
        .unwrap();
    assert_eq!(region["value"], "Республика Алтай");
}

#[test]
fn test_show_records() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--format", "records", "show", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S region \"Республика Алтай\""))
        .stdout(predicate::str::contains("D usage 1 Плюс 1"));
}

#[test]
fn test_show_unknown_record_exit_code_3() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["show", "#99"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("record not found"));
}

#[test]
fn test_show_degrades_when_notes_file_invalid() {
    let catalog = Catalog::new();
    catalog.write_notes("not json");
    catalog
        .cmd()
        .args(["show", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Описание: —"))
        .stderr(predicate::str::contains("notes unavailable"));
}

#[test]
fn test_show_degrades_when_notes_service_down() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--notes-url", &dead_url(), "show", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Регион: Республика Алтай"));
}

#[test]
fn test_show_reads_notes_service() {
    let catalog = Catalog::new();
    let (url, rx) = respond_once(
        200,
        r#"{"04:05:010101:12": {"description": "С сервера"}}"#,
    );
    catalog
        .cmd()
        .args(["--notes-url", &url, "show", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  С сервера"));
    assert_eq!(rx.recv().unwrap().request_line, "GET /notes HTTP/1.1");
}
