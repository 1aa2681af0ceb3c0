//! Integration tests for the `ordo` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn rules_lists_the_builtin_catalog() {
    Command::cargo_bin("ordo")
        .unwrap()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Nose Touch"))
        .stdout(predicate::str::contains("28 rules"));
}

#[test]
fn rules_accepts_a_custom_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(
        &path,
        r#"[{"title": "The Coin Toss", "description": "Flip a coin. Heads starts."}]"#,
    )
    .unwrap();

    Command::cargo_bin("ordo")
        .unwrap()
        .arg("rules")
        .arg("--rules")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("The Coin Toss"))
        .stdout(predicate::str::contains("1 rules"));
}

#[test]
fn decree_quick_mute_prints_a_rotation() {
    Command::cargo_bin("ordo")
        .unwrap()
        .args(["decree", "--quick", "--mute", "--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading"))
        .stdout(predicate::str::contains("Rotation:"));
}

#[test]
fn decree_is_deterministic_under_a_seed() {
    let first = Command::cargo_bin("ordo")
        .unwrap()
        .args(["decree", "--quick", "--mute", "--seed", "7"])
        .output()
        .unwrap();
    let second = Command::cargo_bin("ordo")
        .unwrap()
        .args(["decree", "--quick", "--mute", "--seed", "7"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn invalid_catalog_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(&path, "not json").unwrap();

    Command::cargo_bin("ordo")
        .unwrap()
        .arg("decree")
        .arg("--quick")
        .arg("--mute")
        .arg("--rules")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn empty_catalog_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(&path, "[]").unwrap();

    Command::cargo_bin("ordo")
        .unwrap()
        .arg("rules")
        .arg("--rules")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn blank_rule_is_rejected_with_its_index() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(
        &path,
        r#"[{"title": "Fine", "description": "ok"}, {"title": "", "description": "nope"}]"#,
    )
    .unwrap();

    Command::cargo_bin("ordo")
        .unwrap()
        .arg("rules")
        .arg("--rules")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("rule 1"));
}
