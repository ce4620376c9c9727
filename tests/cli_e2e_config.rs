//! End-to-end tests for the `config` and `export` commands, the two commands
//! that write files.

mod common;
use common::prelude::*;

#[test]
fn test_config_default_path() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[Config] Configuration saved successfully",
        ));

    let content = std::fs::read_to_string(fixture.file("config.ini")).unwrap();
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines, vec!["[Settings]", "Theme=Dark", "FontSize=14"]);
}

#[test]
fn test_config_custom_output() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "-o", "viewer.ini"])
        .assert()
        .success();

    fixture
        .child("viewer.ini")
        .assert(predicate::path::exists());
    fixture
        .child("config.ini")
        .assert(predicate::path::missing());
}

#[test]
fn test_config_unwritable_path_exits_one() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "--output"])
        .arg(fixture.file("no/such/dir/config.ini"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to save configuration"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn test_export_writes_json() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["export", "--seed", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 repositories"));

    let content = std::fs::read_to_string(fixture.file("repo_export.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["1"]["name"], "react");
    assert_eq!(value["2"]["language"], "C");
}
