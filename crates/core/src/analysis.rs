// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One report run: partition, classify, and assign sprints.
//!
//! Each issue is processed on its own against the shared settings and
//! calendar; the result is an immutable [`Analysis`] consumed by the
//! report projections.

use serde::Serialize;

use crate::classify::{classify, Timeline};
use crate::issue::Issue;
use crate::settings::Settings;
use crate::sprint::Calendar;

/// A backlog issue with its reconstructed lifecycle and sprints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedIssue {
    pub issue: Issue,
    pub timeline: Timeline,
    /// Ascending sprint numbers the issue was active in.
    pub sprints: Vec<u32>,
}

impl ClassifiedIssue {
    /// Classifies an issue and assigns it to the calendar's sprints.
    pub fn build(issue: Issue, settings: &Settings, calendar: &Calendar) -> Self {
        let timeline = classify(&issue, &settings.pipelines);
        let sprints = calendar.assign(&timeline);
        tracing::debug!(
            number = issue.number,
            doing = timeline.doing_at.is_some(),
            done = timeline.done_at.is_some(),
            sprints = sprints.len(),
            "classified issue"
        );
        ClassifiedIssue {
            issue,
            timeline,
            sprints,
        }
    }

    /// Returns true if the issue was active in the given sprint.
    pub fn in_sprint(&self, number: u32) -> bool {
        self.sprints.binary_search(&number).is_ok()
    }
}

/// Everything the report projections need for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub settings: Settings,
    pub calendar: Calendar,
    /// Backlog issues in input order.
    pub backlog: Vec<ClassifiedIssue>,
    /// Issues without a backlog label, in input order.
    pub skipped: Vec<Issue>,
}

impl Analysis {
    /// Runs the engine over an issue export.
    pub fn run(issues: Vec<Issue>, settings: &Settings) -> Self {
        let calendar = Calendar::build(settings);
        let (backlog, skipped): (Vec<Issue>, Vec<Issue>) =
            issues.into_iter().partition(|i| settings.is_backlog(i));

        let backlog: Vec<ClassifiedIssue> = backlog
            .into_iter()
            .map(|issue| ClassifiedIssue::build(issue, settings, &calendar))
            .collect();

        tracing::info!(
            backlog = backlog.len(),
            skipped = skipped.len(),
            sprints = calendar.len(),
            "analysis complete"
        );

        Analysis {
            settings: settings.clone(),
            calendar,
            backlog,
            skipped,
        }
    }

    /// Looks up a backlog issue by number.
    pub fn find(&self, number: u64) -> Option<&ClassifiedIssue> {
        self.backlog.iter().find(|c| c.issue.number == number)
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
