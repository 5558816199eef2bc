use std::fs::OpenOptions;
use std::io::Write;

use crate::cli::support::Catalog;
use predicates::prelude::*;

#[test]
fn test_link_map_and_missing_listing() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["link", "#4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Публичная карта: https://pkk.rosreestr.ru/#/search/03:01:000001:6",
        ))
        .stdout(predicate::str::contains("Объявление: —"));
}

#[test]
fn test_link_normalises_saved_listing() {
    let catalog = Catalog::new();
    catalog.write_notes(r#"{"04:05:010101:12": {"avito_link": "avito.ru/item/1"}}"#);
    catalog
        .cmd()
        .args(["link", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Объявление: https://avito.ru/item/1"));
}

#[test]
fn test_link_photo_from_config() {
    let catalog = Catalog::new();
    let mut config = OpenOptions::new()
        .append(true)
        .open(catalog.path().join("parcelbook.toml"))
        .unwrap();
    writeln!(
        config,
        "\n[[photo_links]]\nkeyword = \"лес\"\nlabel = \"Фото леса\"\nurl = \"https://photos.example/forest\""
    )
    .unwrap();

    let output = catalog
        .cmd()
        .args(["--format", "json", "link", "#2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["photo_link"]["url"], "https://photos.example/forest");
    assert_eq!(json["avito_link"], serde_json::Value::Null);
}
