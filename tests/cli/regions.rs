use crate::cli::support::Catalog;
use predicates::prelude::*;

#[test]
fn test_regions_sorted_unique() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .arg("regions")
        .assert()
        .success()
        .stdout("Бурятия\nРеспублика Алтай\n");
}

#[test]
fn test_regions_json() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "regions"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["regions"][0], "Бурятия");
}

#[test]
fn test_regions_records() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .args(["--format", "records", "regions"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H parcelbook=1 records=1 mode=regions count=2\n",
        ))
        .stdout(predicate::str::contains("R \"Республика Алтай\""));
}
