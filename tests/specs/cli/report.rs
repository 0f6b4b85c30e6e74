// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavior tests for the `cadence report` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cadence() -> Command {
    cargo_bin_cmd!("cadence")
}

const CONFIG: &str = "\
backlog_labels = [\"US\", \"BUG\"]

[campaign]
start = \"2022-02-24\"
end = \"2022-03-10\"
sprint_days = 7
";

const ISSUES: &str = r#"{"number":1,"url":"https://example.com/1","title":"Checkout, guest flow","state":"closed","labels":[{"name":"US"}],"assignees":[{"login":"alice"}],"created_at":"2022-02-24T00:00:00Z","closed_at":"2022-03-05T00:00:00Z","events":[{"type":"estimateIssue","created_at":"2022-02-24T12:00:00Z","to_estimate":{"value":3}},{"type":"transferIssue","created_at":"2022-02-25T00:00:00Z","to_pipeline":{"name":"In Progress"}},{"type":"transferIssue","created_at":"2022-03-05T00:00:00Z","to_pipeline":{"name":"Done"}}]}

{"number":2,"title":"Login crash","state":"open","labels":["BUG"],"assignees":["bob"],"created_at":"2022-02-24T00:00:00Z","events":[{"type":"estimate-change","created_at":"2022-02-24T00:00:00Z","to_estimate":5},{"type":"pipeline-transfer","created_at":"2022-03-01T00:00:00Z","to_pipeline":"In Progress"},{"type":"comment","created_at":"2022-03-02T00:00:00Z"}]}
{"number":3,"title":"Docs","state":"open","labels":["docs"],"created_at":"2022-02-24T00:00:00Z"}
"#;

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("cadence.toml"), CONFIG).unwrap();
    std::fs::write(temp.path().join("issues.jsonl"), ISSUES).unwrap();
    temp
}

/// Finds the single report file for a dataset.
fn report_file(dir: &Path, name: &str, ext: &str) -> PathBuf {
    let suffix = format!("_{}_report.{}", name, ext);
    let matches: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.to_string_lossy().ends_with(&suffix))
        .collect();
    assert_eq!(matches.len(), 1, "expected one {} file", suffix);
    matches[0].clone()
}

fn lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn report_writes_five_csv_files() {
    let temp = setup();

    cadence()
        .args(["report", "--input", "issues.jsonl"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 rows to"))
        .stdout(predicate::str::contains("Wrote 1 row to"))
        .stdout(predicate::str::contains("Wrote 15 rows to"));

    let dir = temp.path().join("reports");
    for name in ["backlog", "skipped", "sprints", "daily", "assignees"] {
        report_file(&dir, name, "csv");
    }
}

#[test]
fn report_backlog_csv() {
    let temp = setup();
    cadence()
        .args(["report", "-i", "issues.jsonl"])
        .current_dir(temp.path())
        .assert()
        .success();

    let rows = lines(&report_file(&temp.path().join("reports"), "backlog", "csv"));
    assert_eq!(
        rows,
        vec![
            "number,title,state,url,sprint,points,todo_at,doing_at,done_at,lead_time,cycle_time",
            "1,\"Checkout, guest flow\",closed,https://example.com/1,1-2,3,2022-02-24 00:00:00,2022-02-25 00:00:00,2022-03-05 00:00:00,9,8",
            "2,Login crash,open,,1-2-3,5,2022-02-24 00:00:00,2022-03-01 00:00:00,,,",
        ]
    );
}

#[test]
fn report_sprints_and_assignees_csv() {
    let temp = setup();
    cadence()
        .args(["report", "-i", "issues.jsonl"])
        .current_dir(temp.path())
        .assert()
        .success();
    let dir = temp.path().join("reports");

    assert_eq!(
        lines(&report_file(&dir, "sprints", "csv")),
        vec![
            "number,started_at,ended_at,total_issues,total_points,throughput,velocity",
            "1,2022-02-24,2022-03-03,2,8,0,0",
            "2,2022-03-03,2022-03-10,2,8,1,3",
            "3,2022-03-10,2022-03-17,1,5,0,0",
        ]
    );
    assert_eq!(
        lines(&report_file(&dir, "assignees", "csv")),
        vec![
            "sprint,user,total_issues,total_points,issues",
            "1,alice,1,3,1",
            "1,bob,1,5,2",
            "2,alice,1,3,1",
            "2,bob,1,5,2",
            "3,bob,1,5,2",
        ]
    );
}

#[test]
fn report_daily_csv() {
    let temp = setup();
    cadence()
        .args(["report", "-i", "issues.jsonl"])
        .current_dir(temp.path())
        .assert()
        .success();

    let rows = lines(&report_file(&temp.path().join("reports"), "daily", "csv"));
    assert_eq!(rows.len(), 16);
    assert_eq!(
        rows[0],
        "day,sprint,number_todo,number_doing,number_done,points_doing,points_done,number_wtd,number_wip,number_wdn,points_wip,points_wdn"
    );
    assert_eq!(rows[1], "2022-02-24,1,2,0,0,0,0,2,0,0,0,0");
    // 2022-03-05: issue 1 done, issue 2 in progress.
    assert_eq!(rows[10], "2022-03-05,2,0,0,1,0,3,0,2,1,8,3");
}

#[test]
fn report_skipped_csv() {
    let temp = setup();
    cadence()
        .args(["report", "-i", "issues.jsonl"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(
        lines(&report_file(&temp.path().join("reports"), "skipped", "csv")),
        vec!["number,title,state,url", "3,Docs,open,"]
    );
}

#[test]
fn report_json_format_and_out_dir() {
    let temp = setup();
    cadence()
        .args(["report", "-i", "issues.jsonl", "--out-dir", "out", "--format", "json"])
        .current_dir(temp.path())
        .assert()
        .success();

    let path = report_file(&temp.path().join("out"), "backlog", "json");
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["lead_time"], 9);
    assert_eq!(rows[1]["done_at"], serde_json::Value::Null);
}

#[test]
fn report_missing_input_fails() {
    let temp = setup();
    cadence()
        .args(["report", "-i", "absent.jsonl"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("io error"));
}

#[test]
fn report_bad_line_names_line_number() {
    let temp = setup();
    std::fs::write(
        temp.path().join("broken.jsonl"),
        "{\"number\":1,\"title\":\"a\",\"state\":\"open\",\"created_at\":\"2022-02-24T00:00:00Z\"}\n{\"number\":\"two\"}\n",
    )
    .unwrap();

    cadence()
        .args(["report", "-i", "broken.jsonl"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input at line 2"));
}

#[test]
fn report_logs_with_cadence_log() {
    let temp = setup();
    cadence()
        .args(["report", "-i", "issues.jsonl"])
        .env("CADENCE_LOG", "info")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("analysis complete"));
}
