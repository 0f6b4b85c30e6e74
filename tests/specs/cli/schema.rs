// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior tests for the `cadence schema` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn cadence() -> Command {
    cargo_bin_cmd!("cadence")
}

#[test]
fn schema_requires_subcommand() {
    cadence()
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[parameterized(
    issue = { "issue" },
    timeline = { "timeline" },
    sprints = { "sprints" },
)]
fn schema_outputs_valid_json(name: &str) {
    let output = cadence().args(["schema", name]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value.get("$schema").is_some());
}

#[test]
fn schema_issue_lists_event_types() {
    cadence()
        .args(["schema", "issue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pipeline-transfer"))
        .stdout(predicate::str::contains("estimate-change"));
}

#[test]
fn help_lists_commands() {
    cadence()
        .arg("--help")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("timeline"))
        .stdout(predicate::str::contains("Get started:"));
}
