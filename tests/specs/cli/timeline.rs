// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior tests for the `cadence timeline` command.

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

const CONFIG: &str = "\
[pipelines]
todo = [\"New Issues\", \"Product Backlog\"]
doing = [\"Sprint Backlog\", \"In Progress\", \"Review/QA\"]
done = [\"Done\", \"Closed\"]

[campaign]
start = \"2022-02-24\"
end = \"2022-03-10\"
";

/// Product Backlog, In Progress, Review/QA, Done, with estimates 0, 3, 5.
const ISSUES: &str = r#"{"number":12,"title":"Checkout","state":"closed","labels":["US"],"assignees":["alice"],"created_at":"2022-02-20T00:00:00Z","closed_at":"2022-03-05T00:00:00Z","events":[{"type":"pipeline-transfer","created_at":"2022-02-24T00:00:00Z","to_pipeline":"Product Backlog"},{"type":"estimate-change","created_at":"2022-02-24T01:00:00Z","to_estimate":0},{"type":"estimate-change","created_at":"2022-02-24T02:00:00Z","to_estimate":3},{"type":"pipeline-transfer","created_at":"2022-02-25T00:00:00Z","to_pipeline":"In Progress"},{"type":"estimate-change","created_at":"2022-02-26T00:00:00Z","to_estimate":5},{"type":"pipeline-transfer","created_at":"2022-03-01T00:00:00Z","to_pipeline":"Review/QA"},{"type":"pipeline-transfer","created_at":"2022-03-05T00:00:00Z","to_pipeline":"Done"}]}
{"number":13,"title":"Docs","state":"open","labels":["docs"],"created_at":"2022-02-20T00:00:00Z"}
"#;

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("cadence.toml"), CONFIG).unwrap();
    std::fs::write(temp.path().join("issues.jsonl"), ISSUES).unwrap();
    temp
}

#[test]
fn timeline_text_output() {
    let temp = setup();

    cadence()
        .args(["timeline", "12", "-i", "issues.jsonl"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[closed] #12"))
        .stdout(predicate::str::contains("  todo:  2022-02-24 00:00:00"))
        // Last doing transfer wins.
        .stdout(predicate::str::contains("  doing: 2022-03-01 00:00:00"))
        .stdout(predicate::str::contains("  done:  2022-03-05 00:00:00"))
        // First non-zero estimate wins.
        .stdout(predicate::str::contains("Points: 3"))
        .stdout(predicate::str::contains("Sprints: 1, 2"))
        .stdout(predicate::str::contains("Lead time: 9 days"))
        .stdout(predicate::str::contains("Cycle time: 4 days"));
}

#[test]
fn timeline_json_output() {
    let temp = setup();

    let output = cadence()
        .args(["timeline", "12", "-i", "issues.jsonl", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["number"], 12);
    assert_eq!(value["todo_at"], "2022-02-24T00:00:00Z");
    assert_eq!(value["points"], 3.0);
    assert_eq!(value["sprints"], serde_json::json!([1, 2]));
    assert_eq!(value["lead_time"], 9);
    assert_eq!(value["cycle_time"], 4);
}

#[test]
fn timeline_of_skipped_issue_fails() {
    let temp = setup();

    cadence()
        .args(["timeline", "13", "-i", "issues.jsonl"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("issue not found: #13"));
}

#[test]
fn timeline_of_unknown_issue_fails() {
    let temp = setup();

    cadence()
        .args(["timeline", "404", "-i", "issues.jsonl"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("issue not found: #404"));
}
