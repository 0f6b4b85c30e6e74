// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior tests for the `cadence init` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cadence() -> Command {
    cargo_bin_cmd!("cadence")
}

#[test]
fn init_writes_default_config() {
    let temp = TempDir::new().unwrap();

    cadence()
        .args(["init", "--start", "2022-02-24"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized cadence at"))
        .stdout(predicate::str::contains("Campaign starts 2022-02-24"));

    let content = std::fs::read_to_string(temp.path().join("cadence.toml")).unwrap();
    assert!(content.contains("start = \"2022-02-24\""));
    assert!(content.contains("sprint_days = 7"));
    assert!(content.contains("\"In Progress\""));
    assert!(!content.contains("end ="));
}

#[test]
fn init_with_path() {
    let temp = TempDir::new().unwrap();

    cadence()
        .args(["init", "--path", "conf"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("conf").join("cadence.toml").exists());
}

#[test]
fn init_twice_fails_without_force() {
    let temp = TempDir::new().unwrap();
    cadence()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();

    cadence()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));

    cadence()
        .args(["init", "--force", "--start", "2021-01-04"])
        .current_dir(temp.path())
        .assert()
        .success();
    let content = std::fs::read_to_string(temp.path().join("cadence.toml")).unwrap();
    assert!(content.contains("2021-01-04"));
}

#[test]
fn init_rejects_bad_start() {
    let temp = TempDir::new().unwrap();
    cadence()
        .args(["init", "--start", "02/24/2022"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));
}
