//! Integration tests for the PassKeep CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! The master passphrase is supplied via `PASSKEEP_PASSPHRASE` and the
//! vault location via `--vault`, so nothing is interactive.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper: get a Command pointing at the passkeep binary.
fn passkeep() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("passkeep").expect("binary should exist")
}

/// Helper: a passkeep command wired to a vault inside `tmp`.
fn passkeep_in(tmp: &TempDir) -> Command {
    let mut cmd = passkeep();
    cmd.arg("--vault")
        .arg(tmp.path().join("passwords.json"))
        .env("PASSKEEP_PASSPHRASE", "integration-pass");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    passkeep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local encrypted password manager"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn version_flag_shows_version() {
    passkeep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("passkeep"));
}

#[test]
fn no_args_shows_help() {
    passkeep()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn add_then_get_roundtrip() {
    let tmp = TempDir::new().unwrap();

    passkeep_in(&tmp)
        .args(["add", "github.com", "octocat", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("octocat@github.com"));

    passkeep_in(&tmp)
        .args(["get", "github.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("octocat"))
        .stdout(predicate::str::contains("hunter2"));
}

#[test]
fn list_shows_added_entries() {
    let tmp = TempDir::new().unwrap();

    passkeep_in(&tmp)
        .args(["add", "a.com", "alice", "pw-a"])
        .assert()
        .success();
    passkeep_in(&tmp)
        .args(["add", "b.com", "bob", "pw-b"])
        .assert()
        .success();

    passkeep_in(&tmp)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.com"))
        .stdout(predicate::str::contains("b.com"))
        .stdout(predicate::str::contains("2 entries"));
}

#[test]
fn duplicate_add_fails() {
    let tmp = TempDir::new().unwrap();

    passkeep_in(&tmp)
        .args(["add", "a.com", "u", "p1"])
        .assert()
        .success();

    passkeep_in(&tmp)
        .args(["add", "a.com", "u", "p2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn delete_with_force_removes_entry() {
    let tmp = TempDir::new().unwrap();

    passkeep_in(&tmp)
        .args(["add", "a.com", "u", "p"])
        .assert()
        .success();

    passkeep_in(&tmp)
        .args(["delete", "a.com", "--force"])
        .assert()
        .success();

    passkeep_in(&tmp)
        .args(["get", "a.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry found"));
}

#[test]
fn update_changes_password() {
    let tmp = TempDir::new().unwrap();

    passkeep_in(&tmp)
        .args(["add", "a.com", "u", "old"])
        .assert()
        .success();

    passkeep_in(&tmp)
        .args(["update", "a.com", "u", "new"])
        .assert()
        .success();

    passkeep_in(&tmp)
        .args(["get", "a.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new"));
}

#[test]
fn wrong_passphrase_is_rejected() {
    let tmp = TempDir::new().unwrap();

    passkeep_in(&tmp)
        .args(["add", "a.com", "u", "p"])
        .assert()
        .success();

    passkeep()
        .arg("--vault")
        .arg(tmp.path().join("passwords.json"))
        .env("PASSKEEP_PASSPHRASE", "not-the-passphrase")
        .args(["get", "a.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn get_on_missing_site_fails() {
    let tmp = TempDir::new().unwrap();

    passkeep_in(&tmp)
        .args(["get", "nowhere.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry found"));
}

#[test]
fn piped_stdin_supplies_password() {
    let tmp = TempDir::new().unwrap();

    passkeep_in(&tmp)
        .args(["add", "a.com", "u"])
        .write_stdin("piped-secret\n")
        .assert()
        .success();

    passkeep_in(&tmp)
        .args(["get", "a.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("piped-secret"));
}

#[test]
fn completions_bash_prints_script() {
    passkeep()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passkeep"));
}
