//! # CLI Tests / CLI 测试
//!
//! Argument-surface tests only: parse errors must be rejected before any
//! external command is spawned, so none of these need a toolchain installed.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn no_subcommand_prints_help_and_fails() {
    Command::cargo_bin("suite-runner")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn mode_flags_are_mutually_exclusive() {
    Command::cargo_bin("suite-runner")
        .unwrap()
        .args(["test", "--unit", "--service"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_flags_are_a_usage_error() {
    Command::cargo_bin("suite-runner")
        .unwrap()
        .args(["test", "--everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn serve_rejects_mode_flags() {
    Command::cargo_bin("suite-runner")
        .unwrap()
        .args(["serve", "--unit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn help_lists_both_subcommands() {
    Command::cargo_bin("suite-runner")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("test"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_help_lists_every_mode_flag() {
    Command::cargo_bin("suite-runner")
        .unwrap()
        .args(["test", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--coverage"))
        .stdout(predicate::str::contains("--unit"))
        .stdout(predicate::str::contains("--service"))
        .stdout(predicate::str::contains("--integration"))
        .stdout(predicate::str::contains("--stdio"))
        .stdout(predicate::str::contains("--fast"))
        .stdout(predicate::str::contains("--watch"));
}
