// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run settings shared by every stage of the engine.
//!
//! A [`Settings`] value is built once per run and passed by reference;
//! no stage reads configuration from anywhere else.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::issue::Issue;

/// Workflow stage a pipeline belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Waiting to be picked up.
    Todo,
    /// Actively being worked on.
    Doing,
    /// Completed.
    Done,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Todo => "todo",
            Stage::Doing => "doing",
            Stage::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pipeline names grouped by workflow stage.
///
/// A name may appear under more than one stage; each stage is matched
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pipelines {
    pub todo: Vec<String>,
    pub doing: Vec<String>,
    pub done: Vec<String>,
}

impl Pipelines {
    /// Pipeline names configured for a stage.
    pub fn names(&self, stage: Stage) -> &[String] {
        match stage {
            Stage::Todo => &self.todo,
            Stage::Doing => &self.doing,
            Stage::Done => &self.done,
        }
    }

    /// Returns true if `pipeline` is one of the stage's pipelines.
    pub fn contains(&self, stage: Stage, pipeline: &str) -> bool {
        self.names(stage).iter().any(|p| p == pipeline)
    }
}

impl Default for Pipelines {
    fn default() -> Self {
        Pipelines {
            todo: strings(&["New Issues", "Product Backlog"]),
            doing: strings(&[
                "Sprint Backlog",
                "In Progress",
                "Review",
                "QA (Functional Testing)",
            ]),
            done: strings(&["Done", "Closed"]),
        }
    }
}

/// The campaign period sliced into sprints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// First day of the campaign.
    pub start: NaiveDate,
    /// Last day of the campaign (inclusive).
    pub end: NaiveDate,
    /// Length of every sprint in days.
    pub sprint_days: u32,
}

/// Immutable settings for one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Pipeline names per workflow stage.
    pub pipelines: Pipelines,
    /// Labels that put an issue in the backlog.
    pub backlog_labels: Vec<String>,
    /// Campaign period and sprint length.
    pub campaign: Campaign,
    /// Offset used to anchor calendar days and format timestamps.
    pub offset: FixedOffset,
}

impl Settings {
    /// Creates settings after validating them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] if a pipeline stage is empty or
    /// the sprint length is zero.
    pub fn new(
        pipelines: Pipelines,
        backlog_labels: Vec<String>,
        campaign: Campaign,
        offset: FixedOffset,
    ) -> Result<Self> {
        for stage in [Stage::Todo, Stage::Doing, Stage::Done] {
            if pipelines.names(stage).is_empty() {
                return Err(Error::InvalidSettings(format!(
                    "no pipelines configured for the {} stage",
                    stage
                )));
            }
        }
        if campaign.sprint_days == 0 {
            return Err(Error::InvalidSettings(
                "sprint_days must be at least 1".to_string(),
            ));
        }
        Ok(Settings {
            pipelines,
            backlog_labels,
            campaign,
            offset,
        })
    }

    /// Returns true if the issue carries any backlog label.
    pub fn is_backlog(&self, issue: &Issue) -> bool {
        issue
            .labels
            .iter()
            .any(|label| self.backlog_labels.contains(label))
    }

    /// Instant at which the given calendar day starts.
    pub fn midnight(&self, date: NaiveDate) -> DateTime<Utc> {
        let local = date.and_time(NaiveTime::MIN);
        let shift = TimeDelta::seconds(i64::from(self.offset.local_minus_utc()));
        (local - shift).and_utc()
    }

    /// Calendar day of an instant in the configured offset.
    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        at.with_timezone(&self.offset).date_naive()
    }

    /// Sprint length as a duration.
    pub fn sprint_length(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.campaign.sprint_days))
    }
}

/// Default labels marking backlog issues.
pub fn default_backlog_labels() -> Vec<String> {
    strings(&["US", "BUG", "ENHANCEMENT"])
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Parses a UTC offset such as `+03:00`, `-05:30`, `Z` or `UTC`.
pub fn parse_offset(s: &str) -> Result<FixedOffset> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
        return Ok(Utc.fix());
    }
    trimmed
        .parse::<FixedOffset>()
        .map_err(|_| Error::InvalidOffset(s.to_string()))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
