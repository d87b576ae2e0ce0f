//! CLI interface tests
//!
//! Tests CLI contracts that need no live feed: help/version output,
//! config initialization, completions, and error paths against
//! unreachable endpoints.

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::fixtures;

/// Helper to get the decomp-progress binary command
fn get_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_decomp-progress"))
}

/// An endpoint that refuses connections immediately on any sane machine.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

#[test]
fn test_cli_help_flag_displays_usage_information() {
    let mut cmd = get_bin();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Decompilation progress tracker"));
}

#[test]
fn test_cli_version_flag_displays_version_number() {
    let mut cmd = get_bin();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("decomp-progress"));
}

#[test]
fn test_cli_without_subcommand_lists_commands() {
    let mut cmd = get_bin();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("badge"));
}

#[test]
fn test_completions_bash_mentions_binary_name() {
    let mut cmd = get_bin();
    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("decomp-progress"));
}

#[test]
fn test_init_writes_config_file() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");

    let mut cmd = get_bin();
    cmd.arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let config_path = temp_dir.path().join(".decomp-progress.toml");
    assert!(config_path.exists());

    let contents = std::fs::read_to_string(&config_path).expect("config should be readable");
    assert!(contents.contains("progress-csv-url"));
    assert!(contents.contains("badge-json-url"));
}

#[test]
fn test_init_refuses_to_overwrite_existing_config() {
    let (temp_dir, config_path) =
        fixtures::create_configured_dir("https://example.org/p.csv", "https://example.org/b.json")
            .expect("Failed to create test fixture");
    let before = std::fs::read_to_string(&config_path).expect("config should be readable");

    let mut cmd = get_bin();
    cmd.arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let after = std::fs::read_to_string(&config_path).expect("config should be readable");
    assert_eq!(before, after, "existing config must not be rewritten");
}

#[test]
fn test_status_against_unreachable_feed_fails_with_network_exit_code() {
    let (temp_dir, _config) = fixtures::create_configured_dir(
        &format!("{}/progress.csv", DEAD_ENDPOINT),
        &format!("{}/badge.json", DEAD_ENDPOINT),
    )
    .expect("Failed to create test fixture");

    let mut cmd = get_bin();
    cmd.arg("status")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(69)
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn test_badge_against_unreachable_endpoint_fails_with_network_exit_code() {
    let (temp_dir, _config) = fixtures::create_configured_dir(
        &format!("{}/progress.csv", DEAD_ENDPOINT),
        &format!("{}/badge.json", DEAD_ENDPOINT),
    )
    .expect("Failed to create test fixture");

    let mut cmd = get_bin();
    cmd.arg("badge")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(69)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_status_with_corrupt_config_reports_parse_failure() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        temp_dir.path().join(".decomp-progress.toml"),
        "progress-csv-url = [broken",
    )
    .expect("Failed to write test file");

    let mut cmd = get_bin();
    cmd.arg("status")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(".decomp-progress.toml"));
}
