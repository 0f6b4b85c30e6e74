// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle reconstruction from an issue's event log.
//!
//! Timestamps take the **last** matching transfer for each stage, while
//! the point estimate takes the **first** truthy estimate. Re-entries
//! into a pipeline therefore move the timestamp forward but never change
//! the estimate.
//!
//! Events must already be in ascending chronological order. Inverted
//! timelines (`done_at` before `doing_at`) are passed through unchanged.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::issue::{EventKind, Issue};
use crate::settings::{Pipelines, Stage};

/// Canonical lifecycle of a backlog issue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timeline {
    /// Entered the backlog. Falls back to the creation time.
    pub todo_at: DateTime<Utc>,
    /// Entered active work.
    pub doing_at: Option<DateTime<Utc>>,
    /// Completed.
    pub done_at: Option<DateTime<Utc>>,
    /// First estimate recorded for the issue.
    pub points: Option<f64>,
}

impl Timeline {
    /// Whole days from entering the backlog to completion.
    pub fn lead_time(&self) -> Option<i64> {
        self.done_at.map(|done| whole_days(done, self.todo_at))
    }

    /// Whole days from entering active work to completion.
    pub fn cycle_time(&self) -> Option<i64> {
        match (self.doing_at, self.done_at) {
            (Some(doing), Some(done)) => Some(whole_days(done, doing)),
            _ => None,
        }
    }

    /// Points with missing estimates counted as zero.
    pub fn points_or_zero(&self) -> f64 {
        self.points.unwrap_or(0.0)
    }
}

/// Classifies one issue against the configured pipelines.
pub fn classify(issue: &Issue, pipelines: &Pipelines) -> Timeline {
    let todo_at = last_transfer(issue, pipelines, Stage::Todo).unwrap_or(issue.created_at);
    let done_at = last_transfer(issue, pipelines, Stage::Done).or(issue.closed_at);
    // Skipping the doing pipelines means zero time in progress.
    let doing_at = last_transfer(issue, pipelines, Stage::Doing).or(done_at);

    Timeline {
        todo_at,
        doing_at,
        done_at,
        points: first_estimate(issue),
    }
}

fn last_transfer(issue: &Issue, pipelines: &Pipelines, stage: Stage) -> Option<DateTime<Utc>> {
    issue
        .events
        .iter()
        .rev()
        .find(|e| {
            e.to_pipeline()
                .is_some_and(|pipeline| pipelines.contains(stage, pipeline))
        })
        .map(|e| e.created_at)
}

fn first_estimate(issue: &Issue) -> Option<f64> {
    issue.events.iter().find_map(|e| match e.kind {
        EventKind::EstimateChange {
            to_estimate: Some(value),
        } if is_truthy(value) => Some(value),
        _ => None,
    })
}

// Zero and NaN estimates count as unset.
fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Absolute difference in whole days, rounded down.
fn whole_days(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (a - b).num_days().abs()
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
