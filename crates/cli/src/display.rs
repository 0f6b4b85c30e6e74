// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cadence_core::report::format_timestamp;
use cadence_core::{ClassifiedIssue, Settings, Sprint};

use crate::writer::Written;

/// Format one calendar line for the sprints command.
pub fn format_sprint_line(settings: &Settings, sprint: &Sprint) -> String {
    format!(
        "Sprint {}: {} .. {}",
        sprint.number,
        format_timestamp(settings, sprint.started_at),
        format_timestamp(settings, sprint.ended_at)
    )
}

/// Format an issue's lifecycle for the timeline command.
///
/// Stages that were never reached are shown as `-`.
pub fn format_timeline(settings: &Settings, classified: &ClassifiedIssue) -> String {
    let issue = &classified.issue;
    let timeline = &classified.timeline;
    let stamp = |at: Option<chrono::DateTime<chrono::Utc>>| {
        at.map(|t| format_timestamp(settings, t))
            .unwrap_or_else(|| "-".to_string())
    };

    let mut output = Vec::new();
    output.push(format!("[{}] #{}", issue.state, issue.number));
    output.push(format!("Title: {}", issue.title));
    if !issue.url.is_empty() {
        output.push(format!("URL: {}", issue.url));
    }
    if !issue.labels.is_empty() {
        output.push(format!("Labels: {}", issue.labels.join(", ")));
    }
    if !issue.assignees.is_empty() {
        output.push(format!("Assignees: {}", issue.assignees.join(", ")));
    }

    output.push(String::new());
    output.push(format!("  todo:  {}", stamp(Some(timeline.todo_at))));
    output.push(format!("  doing: {}", stamp(timeline.doing_at)));
    output.push(format!("  done:  {}", stamp(timeline.done_at)));
    output.push(String::new());

    let points = timeline
        .points
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    output.push(format!("Points: {}", points));
    output.push(format!("Sprints: {}", format_sprints(&classified.sprints)));
    if let Some(days) = timeline.lead_time() {
        output.push(format!("Lead time: {} {}", days, plural(days, "day")));
    }
    if let Some(days) = timeline.cycle_time() {
        output.push(format!("Cycle time: {} {}", days, plural(days, "day")));
    }

    output.join("\n")
}

/// Format the summary line printed after a dataset is written.
pub fn format_written(written: &Written) -> String {
    format!(
        "Wrote {} {} to {}",
        written.rows,
        plural(written.rows as i64, "row"),
        written.path.display()
    )
}

fn format_sprints(sprints: &[u32]) -> String {
    if sprints.is_empty() {
        return "none".to_string();
    }
    sprints
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn plural(count: i64, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
