use crate::cli::support::{dead_url, respond_once, Catalog};
use predicates::prelude::*;

#[test]
fn test_describe_without_ai_url() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--format", "json", "describe", "#1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"ai_not_configured\""));
}

#[test]
fn test_describe_prints_generated_text() {
    let catalog = Catalog::new();
    let (url, rx) = respond_once(200, r#"{"text": "  Живописный участок у реки  "}"#);
    catalog
        .cmd()
        .args([
            "--ai-url",
            &format!("{}/ai/describe", url),
            "describe",
            "#1",
            "--instruction",
            "короче",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("Живописный участок у реки\n"));

    let request = rx.recv().unwrap();
    assert_eq!(request.request_line, "POST /ai/describe HTTP/1.1");
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["instruction"], "короче");
    assert_eq!(body["existing_note"], "");
    assert_eq!(body["record"]["cadastral_number"], "04:05:010101:12");

    // Generated text is not persisted without --save
    assert_eq!(catalog.read_notes(), serde_json::json!({}));
}

#[test]
fn test_describe_sends_saved_description() {
    let catalog = Catalog::new();
    catalog.write_notes(r#"{"04:05:010101:11": {"description": "Старое описание"}}"#);
    let (url, rx) = respond_once(200, r#"{"text": "Новое"}"#);
    catalog
        .cmd()
        .args(["--ai-url", &url, "describe", "#2"])
        .assert()
        .success();

    let body: serde_json::Value = serde_json::from_str(&rx.recv().unwrap().body).unwrap();
    assert_eq!(body["existing_note"], "Старое описание");
    assert!(body.get("instruction").is_none());
}

#[test]
fn test_describe_save_writes_note() {
    let catalog = Catalog::new();
    let (url, _rx) = respond_once(200, r#"{"text": "Сгенерировано"}"#);
    let output = catalog
        .cmd()
        .args(["--format", "json", "--ai-url", &url, "describe", "#3", "--save"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["source"], "ai");
    assert_eq!(json["saved"], true);
    assert_eq!(json["draft"], "Сгенерировано");
    assert_eq!(
        catalog.read_notes()["03:01:000001:5"]["description"],
        "Сгенерировано"
    );
}

#[test]
fn test_describe_empty_text() {
    let catalog = Catalog::new();
    let (url, _rx) = respond_once(200, r#"{"text": "   "}"#);
    catalog
        .cmd()
        .args(["--format", "json", "--ai-url", &url, "describe", "#1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"ai_failed\""));
}

#[test]
fn test_describe_service_503_is_not_configured() {
    let catalog = Catalog::new();
    let (url, _rx) = respond_once(503, "");
    catalog
        .cmd()
        .args(["--format", "json", "--ai-url", &url, "describe", "#1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"ai_not_configured\""));
}

#[test]
fn test_describe_unreachable() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--ai-url", &dead_url(), "describe", "#1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("AI service unreachable"));
}
