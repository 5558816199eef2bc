use std::fs;

use crate::cli::support::Catalog;
use chrono::Local;
use predicates::prelude::*;

const SCRIPT: &str = "\
# pick the second Altai parcel and annotate it
region Республика Алтай
select 2
edit Текст\\nвторая строка
save-description
link avito.ru/5
save-link
open-link
export rtf out
bogus
quit
draft
";

#[test]
fn test_browse_script_session() {
    let catalog = Catalog::new();
    fs::write(catalog.path().join("session.txt"), SCRIPT).unwrap();

    catalog
        .cmd()
        .args(["browse", "--script", "session.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 parcels loaded, 0 notes"))
        .stdout(predicate::str::contains("[save-description] Сохранено"))
        .stdout(predicate::str::contains("[save-link] Сохранено"))
        .stdout(predicate::str::contains("[open-link] Открыть: https://avito.ru/5"))
        .stdout(predicate::str::contains("[export] Файл сохранён:"))
        // Nothing after quit runs
        .stdout(predicate::str::contains("[draft]").not())
        .stderr(predicate::str::contains("unknown browse action: bogus"));

    let notes = catalog.read_notes();
    let entry = &notes["04:05:010101:12"];
    assert_eq!(entry["description"], "Текст\nвторая строка");
    assert_eq!(entry["avito_link"], "avito.ru/5");

    let today = Local::now().format("%Y-%m-%d");
    let report = catalog
        .path()
        .join("out")
        .join(format!("parcel_04_05_010101_12_{}.rtf", today));
    assert!(report.exists());
}

#[test]
fn test_browse_region_autoselects_from_stdin() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .arg("browse")
        .write_stdin("region Республика Алтай\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("> #2     04:05:010101:11"))
        .stdout(predicate::str::contains("Лес"));
}

#[test]
fn test_browse_generate_without_ai() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .arg("browse")
        .write_stdin("edit мой текст\ngenerate\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[generate] ИИ-описание не настроено"))
        .stdout(predicate::str::contains("мой текст"));
}

#[test]
fn test_browse_select_out_of_range() {
    let catalog = Catalog::new();
    catalog
        .cmd()
        .arg("browse")
        .write_stdin("select 9\nselect 0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[select] Участок не выбран"))
        .stderr(predicate::str::contains("invalid row number: 0"));
}

#[test]
fn test_browse_json_lines() {
    let catalog = Catalog::new();
    let output = catalog
        .cmd()
        .args(["--format", "json", "browse"])
        .write_stdin("cadastral 03:01\nedit Заметка\nsave-description\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let last: serde_json::Value =
        serde_json::from_str(stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["action"], "save-description");
    assert_eq!(last["status"]["status"], "saved");
    assert_eq!(last["total"], 2);
    assert_eq!(last["selected"], "03:01:000001:5");
    assert_eq!(last["ai_available"], false);

    assert_eq!(catalog.read_notes()["03:01:000001:5"]["description"], "Заметка");
}
