// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for JSON input and output structures.
//!
//! These are separate from the engine types so that schema-specific
//! annotations stay out of `cadence-core`. [`TimelineJson`] and
//! [`SprintJson`] are also what `-o json` prints; [`input::IssueInput`]
//! exists purely to document the issue export.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::Serialize;

pub mod input;

/// Open or closed.
#[derive(JsonSchema, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Open,
    Closed,
}

impl From<cadence_core::IssueState> for State {
    fn from(value: cadence_core::IssueState) -> Self {
        match value {
            cadence_core::IssueState::Open => State::Open,
            cadence_core::IssueState::Closed => State::Closed,
        }
    }
}

/// Reconstructed lifecycle of one backlog issue.
#[derive(JsonSchema, Serialize)]
pub struct TimelineJson {
    /// Issue number in the tracker.
    pub number: u64,
    pub title: String,
    pub state: State,
    /// When the issue entered the backlog.
    pub todo_at: DateTime<Utc>,
    /// When active work started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doing_at: Option<DateTime<Utc>>,
    /// When the issue was completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_at: Option<DateTime<Utc>>,
    /// First estimate recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    /// Sprints the issue was active in, ascending.
    pub sprints: Vec<u32>,
    /// Whole days from backlog to completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_time: Option<i64>,
    /// Whole days from start of work to completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_time: Option<i64>,
}

impl From<&cadence_core::ClassifiedIssue> for TimelineJson {
    fn from(c: &cadence_core::ClassifiedIssue) -> Self {
        TimelineJson {
            number: c.issue.number,
            title: c.issue.title.clone(),
            state: c.issue.state.into(),
            todo_at: c.timeline.todo_at,
            doing_at: c.timeline.doing_at,
            done_at: c.timeline.done_at,
            points: c.timeline.points,
            sprints: c.sprints.clone(),
            lead_time: c.timeline.lead_time(),
            cycle_time: c.timeline.cycle_time(),
        }
    }
}

/// One sprint window. Both bounds are inclusive.
#[derive(JsonSchema, Serialize)]
pub struct SprintJson {
    /// 1-based sprint number.
    pub number: u32,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

impl From<&cadence_core::Sprint> for SprintJson {
    fn from(s: &cadence_core::Sprint) -> Self {
        SprintJson {
            number: s.number,
            started_at: s.started_at,
            ended_at: s.ended_at,
        }
    }
}

/// Output of `cadence sprints -o json`.
#[derive(JsonSchema, Serialize)]
pub struct SprintsOutputJson {
    pub sprints: Vec<SprintJson>,
}
