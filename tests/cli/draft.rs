use crate::cli::support::Catalog;
use predicates::prelude::*;

#[test]
fn test_draft_composes_template() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["draft", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Участок 04:05:010101:12 (2,5 га) расположен в районе Республика Алтай.",
        ))
        .stdout(predicate::str::contains("Рядом река"))
        .stdout(predicate::str::contains("Рекомендуемое назначение: 1; 3."))
        .stdout(predicate::str::contains("цена за участок 1\u{a0}000 руб"));
}

#[test]
fn test_draft_does_not_save() {
    let catalog = Catalog::new();
    catalog.cmd().args(["draft", "#1"]).assert().success();
    assert_eq!(catalog.read_notes(), serde_json::json!({}));
}

#[test]
fn test_draft_json() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "draft", "#3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cadastral_number"], "03:01:000001:5");
    assert_eq!(json["source"], "template");
    assert!(json["draft"]
        .as_str()
        .unwrap()
        .starts_with("Участок 03:01:000001:5 (1 га)"));
}

#[test]
fn test_draft_records_body() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--format", "records", "draft", "#2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=draft"))
        .stdout(predicate::str::contains("B draft"))
        .stdout(predicate::str::contains("B-END"));
}
