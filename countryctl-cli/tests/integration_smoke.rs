//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

// === Help ===

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("countryctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("countryctl").unwrap();
    cmd.arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("case-insensitive"))
        .stdout(predicate::str::contains("--json"));
}

// === Config Command Tests ===

#[test]
fn test_config_path_respects_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");

    let mut cmd = Command::cargo_bin("countryctl").unwrap();
    cmd.arg("--config").arg(&path).arg("config").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_init_then_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Command::cargo_bin("countryctl")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("debounce_ms = 300"));
    assert!(written.contains("restcountries.com"));

    Command::cargo_bin("countryctl")
        .unwrap()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_config_show_applies_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[search]\ndebounce_ms = 120\n").unwrap();

    let mut cmd = Command::cargo_bin("countryctl").unwrap();
    cmd.env_remove("COUNTRYCTL_ENDPOINT")
        .env_remove("COUNTRYCTL_DEBOUNCE_MS")
        .arg("--config")
        .arg(&path)
        .arg("--endpoint")
        .arg("http://127.0.0.1:9/all")
        .args(["config", "show"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("debounce_ms = 120"))
        .stdout(predicate::str::contains("http://127.0.0.1:9/all"));
}

// === List Command Tests ===

#[test]
fn test_list_unreachable_endpoint_shows_fetch_error() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("countryctl").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("--endpoint")
        .arg("http://127.0.0.1:9/v3.1/all")
        .args(["list", "--search", "fra"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to fetch countries. Please try again later.",
        ));
}
