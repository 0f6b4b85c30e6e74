// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior tests for the `cadence sprints` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

fn cadence() -> Command {
    cargo_bin_cmd!("cadence")
}

fn with_config(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("cadence.toml"), content).unwrap();
    temp
}

const CAMPAIGN: &str = "[campaign]\nstart = \"2022-02-24\"\nend = \"2022-05-04\"\nsprint_days = 7\n";

#[test]
fn sprints_lists_weekly_windows() {
    let temp = with_config(CAMPAIGN);

    cadence()
        .arg("sprints")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sprint 1: 2022-02-24 00:00:00 .. 2022-03-03 00:00:00",
        ))
        .stdout(predicate::str::contains(
            "Sprint 10: 2022-04-28 00:00:00 .. 2022-05-05 00:00:00",
        ))
        .stdout(predicate::str::contains("Sprint 11").not());
}

#[test]
fn sprints_json_output() {
    let temp = with_config(CAMPAIGN);

    let output = cadence()
        .args(["sprints", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sprints = value["sprints"].as_array().unwrap();
    assert_eq!(sprints.len(), 10);
    assert_eq!(sprints[0]["started_at"], "2022-02-24T00:00:00Z");
}

#[test]
fn sprints_with_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("team.toml");
    std::fs::write(
        &path,
        "[campaign]\nstart = \"2022-02-24\"\nend = \"2022-03-10\"\nsprint_days = 14\n",
    )
    .unwrap();

    cadence()
        .args(["sprints", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sprint 1: 2022-02-24 00:00:00 .. 2022-03-10 00:00:00"))
        .stdout(predicate::str::contains("Sprint 2: 2022-03-10 00:00:00 .. 2022-03-24 00:00:00"));
}

#[test]
fn sprints_anchor_on_local_midnight() {
    let temp = with_config(&format!("utc_offset = \"-03:00\"\n\n{}", CAMPAIGN));

    let output = cadence()
        .args(["sprints", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sprints"][0]["started_at"], "2022-02-24T03:00:00Z");
}

#[test]
fn sprints_without_config_fails() {
    let temp = TempDir::new().unwrap();

    cadence()
        .arg("sprints")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no config file"))
        .stderr(predicate::str::contains("cadence init"));
}

#[parameterized(
    zero_sprint_days = { "[campaign]\nstart = \"2022-02-24\"\nsprint_days = 0\n", "sprint_days" },
    bad_offset = { "utc_offset = \"later\"\n[campaign]\nstart = \"2022-02-24\"\n", "invalid UTC offset" },
    bad_toml = { "[campaign\n", "failed to parse" },
)]
fn sprints_reports_config_errors(content: &str, message: &str) {
    let temp = with_config(content);

    cadence()
        .arg("sprints")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: config error:"))
        .stderr(predicate::str::contains(message));
}
