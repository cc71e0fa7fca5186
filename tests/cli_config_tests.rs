//! End-to-end tests for the ctradeconf binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn ctradeconf() -> Command {
    Command::cargo_bin("ctradeconf").unwrap()
}

fn config_file(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join("ctrade.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn test_first_run_creates_default_file_in_home() {
    let home = TempDir::new().unwrap();

    ctradeconf()
        .env("HOME", home.path())
        .args(["--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("electrumBin"));

    let created = fs::read_to_string(home.path().join(".ctradeconf")).unwrap();
    assert!(created.contains("electrumBin"));
}

#[cfg(unix)]
#[test]
fn test_show_origin_reports_home_file() {
    let home = TempDir::new().unwrap();

    ctradeconf()
        .env("HOME", home.path())
        .args(["--show-origin", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".ctradeconf"))
        .stdout(predicate::str::contains("\"entries\":1"));
}

#[test]
fn test_set_then_get_value() {
    let dir = TempDir::new().unwrap();
    let path = config_file(dir.path(), "electrumBin = \"\"\n");

    ctradeconf()
        .arg("--file")
        .arg(&path)
        .args(["electrumBin", "/usr/bin/electrum"])
        .assert()
        .success();

    ctradeconf()
        .arg("--file")
        .arg(&path)
        .arg("electrumBin")
        .assert()
        .success()
        .stdout("/usr/bin/electrum\n");
}

#[test]
fn test_get_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    let path = config_file(dir.path(), "");

    ctradeconf()
        .arg("--file")
        .arg(&path)
        .arg("nothing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not set"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    ctradeconf()
        .arg("--file")
        .arg(dir.path().join("absent.toml"))
        .arg("--list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(!dir.path().join("absent.toml").exists());
}

#[test]
fn test_list_json_output() {
    let dir = TempDir::new().unwrap();
    let path = config_file(dir.path(), "b = \"2\"\na = \"\"\n");

    let output = ctradeconf()
        .arg("--file")
        .arg(&path)
        .args(["--list", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let listed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed, serde_json::json!({ "a": "", "b": "2" }));
}

#[test]
fn test_unset_removes_key_from_file() {
    let dir = TempDir::new().unwrap();
    let path = config_file(dir.path(), "keep = \"1\"\ndrop = \"2\"\n");

    ctradeconf()
        .arg("--file")
        .arg(&path)
        .args(["--unset", "drop"])
        .assert()
        .success();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("keep"));
    assert!(!contents.contains("drop"));
}
