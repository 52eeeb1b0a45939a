#![allow(deprecated)]

// Binary-level checks. Both endpoints point at a closed local port, so any
// request fails fast instead of reaching a public service.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pastebincli(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pastebincli").unwrap();
    cmd.env("PASTEBINCLI_CONFIG_DIR", config_dir.path())
        .env("PASTEBINCLI_PASTERS_URL", "http://127.0.0.1:9")
        .env("PASTEBINCLI_PASTEBIN_URL", "http://127.0.0.1:9")
        .env_remove("PASTEBINCLI_LOG");
    cmd
}

#[test]
fn help_lists_commands_and_create_options() {
    let dir = TempDir::new().unwrap();
    pastebincli(&dir)
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--private"));
}

#[test]
fn no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();
    pastebincli(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_command_exits_zero() {
    let dir = TempDir::new().unwrap();
    pastebincli(&dir)
        .arg("upload")
        .assert()
        .success()
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn create_without_config_fails() {
    let dir = TempDir::new().unwrap();
    pastebincli(&dir)
        .args(["create", "--text", "hi"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("setup"));
}

#[test]
fn create_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "backend = \"pasters\"\n").unwrap();
    pastebincli(&dir)
        .args(["create", "--file", "missing.txt"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("File not found"))
        .stdout(predicate::str::contains("Sending").not());
}

#[test]
fn text_and_file_together_are_rejected() {
    let dir = TempDir::new().unwrap();
    pastebincli(&dir)
        .args(["create", "--text", "a", "--file", "b.txt"])
        .assert()
        .failure();
}

#[test]
fn corrupt_config_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "backend = [").unwrap();
    pastebincli(&dir)
        .args(["create", "--text", "hi"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("unreadable"));
}

#[test]
fn unreachable_service_is_a_network_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "backend = \"pasters\"\n").unwrap();
    pastebincli(&dir)
        .args(["create", "--text", "hi"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Network error"))
        .stdout(predicate::str::contains("Paste Created").not());
}
