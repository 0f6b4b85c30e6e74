// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema of one line of the issue export read by `report` and `timeline`.

// Never constructed; these types only feed schema generation.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use schemars::JsonSchema;

use super::State;

/// An issue with its event log.
#[derive(JsonSchema)]
pub struct IssueInput {
    /// Issue number in the tracker.
    pub number: u64,
    #[serde(default)]
    pub url: String,
    pub title: String,
    pub state: State,
    /// Labels; any backlog label puts the issue in the backlog.
    #[serde(default)]
    pub labels: Vec<Name>,
    /// Logins of the assigned users.
    #[serde(default)]
    pub assignees: Vec<Name>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    /// Board events. Types other than the two below are ignored.
    #[serde(default)]
    pub events: Vec<EventInput>,
}

/// A label or login, as a bare string or an object.
#[derive(JsonSchema)]
#[serde(untagged)]
pub enum Name {
    Plain(String),
    Named {
        #[serde(alias = "login")]
        name: String,
    },
}

/// A board event.
#[derive(JsonSchema)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EventInput {
    /// The issue moved to another pipeline.
    PipelineTransfer {
        created_at: DateTime<Utc>,
        to_pipeline: Name,
    },
    /// The issue's estimate changed; null clears it.
    EstimateChange {
        created_at: DateTime<Utc>,
        to_estimate: Option<Estimate>,
    },
}

/// An estimate, as a bare number or `{"value": n}`.
#[derive(JsonSchema)]
#[serde(untagged)]
pub enum Estimate {
    Plain(f64),
    Valued { value: f64 },
}
