// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input issue types for the cadence engine.
//!
//! This module contains the records handed over by the issue source:
//! Issue, IssueState, Event, and EventKind. They are read once per run
//! and never modified by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Open/closed state reported by the issue source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// Still open upstream.
    Open,
    /// Closed upstream (completed or abandoned).
    Closed,
}

impl IssueState {
    /// Returns the string representation used in exports and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An issue as exported by the issue source, with its full event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number within the repository.
    pub number: u64,
    /// Browser URL of the issue.
    #[serde(default)]
    pub url: String,
    /// Short description of the work.
    pub title: String,
    /// Upstream open/closed state.
    pub state: IssueState,
    /// Label names attached to the issue.
    #[serde(default, deserialize_with = "names")]
    pub labels: Vec<String>,
    /// User handles assigned to the issue, in source order.
    #[serde(default, deserialize_with = "names")]
    pub assignees: Vec<String>,
    /// When the issue was opened.
    pub created_at: DateTime<Utc>,
    /// When the issue was closed, if it is closed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Workflow events in ascending chronological order.
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Issue {
    /// Creates an open issue with no labels, assignees or events.
    pub fn new(number: u64, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Issue {
            number,
            url: String::new(),
            title: title.into(),
            state: IssueState::Open,
            labels: Vec::new(),
            assignees: Vec::new(),
            created_at,
            closed_at: None,
            events: Vec::new(),
        }
    }

    /// Sets the issue URL (builder pattern).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Marks the issue closed at the given time (builder pattern).
    pub fn closed(mut self, closed_at: DateTime<Utc>) -> Self {
        self.state = IssueState::Closed;
        self.closed_at = Some(closed_at);
        self
    }

    /// Adds a label (builder pattern).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Adds an assignee (builder pattern).
    pub fn with_assignee(mut self, login: impl Into<String>) -> Self {
        self.assignees.push(login.into());
        self
    }

    /// Appends an event to the log (builder pattern).
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Sorts the event log by timestamp, keeping source order for ties.
    pub fn sort_events(&mut self) {
        self.events.sort_by_key(|e| e.created_at);
    }
}

/// What kind of change an event records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EventKind {
    /// The issue was moved into a pipeline.
    #[serde(alias = "transferIssue")]
    PipelineTransfer {
        #[serde(deserialize_with = "name")]
        to_pipeline: String,
    },
    /// The issue's point estimate was set or cleared.
    #[serde(alias = "estimateIssue")]
    EstimateChange {
        #[serde(
            default,
            deserialize_with = "estimate",
            skip_serializing_if = "Option::is_none"
        )]
        to_estimate: Option<f64>,
    },
    /// Any other event type. Ignored by the engine.
    #[serde(other)]
    Other,
}

/// A timestamped entry in an issue's event log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
    /// What happened.
    #[serde(flatten)]
    pub kind: EventKind,
}

impl Event {
    /// A transfer into the named pipeline.
    pub fn transfer(to_pipeline: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Event {
            created_at,
            kind: EventKind::PipelineTransfer {
                to_pipeline: to_pipeline.into(),
            },
        }
    }

    /// An estimate change to the given value (`None` clears it).
    pub fn estimate(to_estimate: Option<f64>, created_at: DateTime<Utc>) -> Self {
        Event {
            created_at,
            kind: EventKind::EstimateChange { to_estimate },
        }
    }

    /// The pipeline this event moved the issue into, if it is a transfer.
    pub fn to_pipeline(&self) -> Option<&str> {
        match &self.kind {
            EventKind::PipelineTransfer { to_pipeline } => Some(to_pipeline),
            _ => None,
        }
    }
}

// The source exports names either as bare strings or wrapped in objects
// (`{"name": ...}` for labels and pipelines, `{"login": ...}` for users).
#[derive(Deserialize)]
#[serde(untagged)]
enum NameRef {
    Plain(String),
    Named {
        #[serde(alias = "login")]
        name: String,
    },
}

impl From<NameRef> for String {
    fn from(r: NameRef) -> Self {
        match r {
            NameRef::Plain(s) | NameRef::Named { name: s } => s,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EstimateRef {
    Plain(f64),
    Valued { value: Option<f64> },
}

fn name<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    NameRef::deserialize(deserializer).map(String::from)
}

fn names<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    let refs = Vec::<NameRef>::deserialize(deserializer)?;
    Ok(refs.into_iter().map(String::from).collect())
}

fn estimate<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<f64>, D::Error> {
    let value = Option::<EstimateRef>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        EstimateRef::Plain(n) => Some(n),
        EstimateRef::Valued { value } => value,
    }))
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
