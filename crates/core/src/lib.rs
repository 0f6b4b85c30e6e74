// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cadence-core: timeline reconstruction and flow metrics
//!
//! This crate turns an issue export (issues plus their pipeline and
//! estimate events) into per-issue lifecycles, sprint membership, and the
//! aggregate report datasets used by the cadence CLI.

pub mod analysis;
pub mod classify;
pub mod error;
pub mod issue;
pub mod jsonl;
pub mod report;
pub mod settings;
pub mod sprint;

pub use analysis::{Analysis, ClassifiedIssue};
pub use classify::{classify, Timeline};
pub use error::{Error, Result};
pub use issue::{Event, EventKind, Issue, IssueState};
pub use report::{
    AssigneeRow, BacklogRow, DailyRow, Reports, SkippedRow, SprintRow, Tabular,
};
pub use settings::{Campaign, Pipelines, Settings, Stage};
pub use sprint::{Calendar, Sprint};
