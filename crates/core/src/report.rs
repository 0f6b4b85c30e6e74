// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregate report projections.
//!
//! Five independent, read-only views over an [`Analysis`]: backlog,
//! skipped, sprints, daily, and assignees. Missing estimates count as
//! zero points in every sum.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::analysis::{Analysis, ClassifiedIssue};
use crate::issue::IssueState;
use crate::settings::Settings;
use crate::sprint::Sprint;

/// Timestamp format used in report cells.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A row that can be written as one line of a delimited file.
pub trait Tabular {
    /// Column names, in record order.
    const HEADERS: &'static [&'static str];

    /// Cell values, in header order. Missing values are empty strings.
    fn record(&self) -> Vec<String>;
}

/// One row per backlog issue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BacklogRow {
    pub number: u64,
    pub title: String,
    pub state: IssueState,
    pub url: String,
    /// Sprint numbers joined with `-`.
    pub sprint: String,
    pub points: Option<f64>,
    pub todo_at: String,
    pub doing_at: Option<String>,
    pub done_at: Option<String>,
    pub lead_time: Option<i64>,
    pub cycle_time: Option<i64>,
}

/// One row per issue without a backlog label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub number: u64,
    pub title: String,
    pub state: IssueState,
    pub url: String,
}

/// Totals for one sprint window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprintRow {
    pub number: u32,
    pub started_at: NaiveDate,
    pub ended_at: NaiveDate,
    /// Issues active in the sprint.
    pub total_issues: usize,
    pub total_points: f64,
    /// Issues completed within the window.
    pub throughput: usize,
    /// Points completed within the window.
    pub velocity: f64,
}

/// Flow counts for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRow {
    pub day: NaiveDate,
    pub sprint: Option<u32>,
    pub number_todo: usize,
    pub number_doing: usize,
    pub number_done: usize,
    pub points_doing: f64,
    pub points_done: f64,
    /// Waiting to do.
    pub number_wtd: usize,
    /// Work in progress.
    pub number_wip: usize,
    /// Work done.
    pub number_wdn: usize,
    pub points_wip: f64,
    pub points_wdn: f64,
}

/// Work carried by one assignee in one sprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssigneeRow {
    pub sprint: u32,
    pub user: String,
    pub total_issues: usize,
    pub total_points: f64,
    /// Issue numbers joined with `,`.
    pub issues: String,
}

/// All five datasets of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reports {
    pub backlog: Vec<BacklogRow>,
    pub skipped: Vec<SkippedRow>,
    pub sprints: Vec<SprintRow>,
    pub daily: Vec<DailyRow>,
    pub assignees: Vec<AssigneeRow>,
}

impl Reports {
    pub fn build(analysis: &Analysis) -> Self {
        Reports {
            backlog: backlog(analysis),
            skipped: skipped(analysis),
            sprints: sprints(analysis),
            daily: daily(analysis),
            assignees: assignees(analysis),
        }
    }
}

/// Backlog view: identity, sprints, points, timeline, lead and cycle time.
pub fn backlog(analysis: &Analysis) -> Vec<BacklogRow> {
    let settings = &analysis.settings;
    analysis
        .backlog
        .iter()
        .map(|c| BacklogRow {
            number: c.issue.number,
            title: c.issue.title.clone(),
            state: c.issue.state,
            url: c.issue.url.clone(),
            sprint: join(&c.sprints, "-"),
            points: c.timeline.points,
            todo_at: format_timestamp(settings, c.timeline.todo_at),
            doing_at: c.timeline.doing_at.map(|t| format_timestamp(settings, t)),
            done_at: c.timeline.done_at.map(|t| format_timestamp(settings, t)),
            lead_time: c.timeline.lead_time(),
            cycle_time: c.timeline.cycle_time(),
        })
        .collect()
}

/// Skipped view: identity fields only.
pub fn skipped(analysis: &Analysis) -> Vec<SkippedRow> {
    analysis
        .skipped
        .iter()
        .map(|i| SkippedRow {
            number: i.number,
            title: i.title.clone(),
            state: i.state,
            url: i.url.clone(),
        })
        .collect()
}

/// Sprint view: load, throughput and velocity per window.
pub fn sprints(analysis: &Analysis) -> Vec<SprintRow> {
    let settings = &analysis.settings;
    analysis
        .calendar
        .sprints()
        .iter()
        .map(|sprint| {
            let active: Vec<&ClassifiedIssue> = analysis
                .backlog
                .iter()
                .filter(|c| c.in_sprint(sprint.number))
                .collect();
            let completed: Vec<&ClassifiedIssue> = active
                .iter()
                .copied()
                .filter(|c| completed_within(c, sprint))
                .collect();

            SprintRow {
                number: sprint.number,
                started_at: settings.local_date(sprint.started_at),
                ended_at: settings.local_date(sprint.ended_at),
                total_issues: active.len(),
                total_points: sum_points(&active),
                throughput: completed.len(),
                velocity: sum_points(&completed),
            }
        })
        .collect()
}

/// Daily view: arrivals per stage and cumulative flow, one row per day.
pub fn daily(analysis: &Analysis) -> Vec<DailyRow> {
    let settings = &analysis.settings;
    let campaign = &settings.campaign;
    let issues = &analysis.backlog;

    campaign
        .start
        .iter_days()
        .take_while(|day| *day <= campaign.end)
        .map(|day| {
            let midnight = settings.midnight(day);
            let on_day = |at: Option<DateTime<Utc>>| {
                at.is_some_and(|t| settings.local_date(t) == day)
            };

            let todo = select(issues, |c| on_day(Some(c.timeline.todo_at)));
            let doing = select(issues, |c| on_day(c.timeline.doing_at));
            let done = select(issues, |c| on_day(c.timeline.done_at));
            let waiting = select(issues, |c| {
                c.timeline.todo_at <= midnight
                    && c.timeline.doing_at.is_none_or(|t| midnight <= t)
            });
            let in_progress = select(issues, |c| {
                c.timeline.doing_at.is_some_and(|t| t <= midnight)
                    && c.timeline.done_at.is_none_or(|t| midnight <= t)
            });
            let finished = select(issues, |c| c.timeline.done_at.is_some_and(|t| t <= midnight));

            DailyRow {
                day,
                sprint: analysis.calendar.sprint_at(midnight).map(|s| s.number),
                number_todo: todo.len(),
                number_doing: doing.len(),
                number_done: done.len(),
                points_doing: sum_points(&doing),
                points_done: sum_points(&done),
                number_wtd: waiting.len(),
                number_wip: in_progress.len(),
                number_wdn: finished.len(),
                points_wip: sum_points(&in_progress),
                points_wdn: sum_points(&finished),
            }
        })
        .collect()
}

/// Assignee view: per sprint and user, merged on repeated pairs.
pub fn assignees(analysis: &Analysis) -> Vec<AssigneeRow> {
    let mut rows: Vec<AssigneeRow> = Vec::new();
    let mut index: HashMap<(u32, String), usize> = HashMap::new();

    for sprint in analysis.calendar.sprints() {
        for c in analysis.backlog.iter().filter(|c| c.in_sprint(sprint.number)) {
            let points = c.timeline.points_or_zero();
            for user in &c.issue.assignees {
                let key = (sprint.number, user.clone());
                match index.get(&key) {
                    Some(&i) => {
                        let row = &mut rows[i];
                        row.total_issues += 1;
                        row.total_points += points;
                        row.issues.push(',');
                        row.issues.push_str(&c.issue.number.to_string());
                    }
                    None => {
                        index.insert(key, rows.len());
                        rows.push(AssigneeRow {
                            sprint: sprint.number,
                            user: user.clone(),
                            total_issues: 1,
                            total_points: points,
                            issues: c.issue.number.to_string(),
                        });
                    }
                }
            }
        }
    }
    rows
}

/// Formats an instant in the configured offset.
pub fn format_timestamp(settings: &Settings, at: DateTime<Utc>) -> String {
    at.with_timezone(&settings.offset)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

fn completed_within(c: &ClassifiedIssue, sprint: &Sprint) -> bool {
    c.timeline.done_at.is_some_and(|t| sprint.contains(t))
}

fn select<F>(issues: &[ClassifiedIssue], pred: F) -> Vec<&ClassifiedIssue>
where
    F: Fn(&ClassifiedIssue) -> bool,
{
    issues.iter().filter(|c| pred(c)).collect()
}

fn sum_points(issues: &[&ClassifiedIssue]) -> f64 {
    // Empty sums must be +0.0 so they render as "0".
    issues
        .iter()
        .fold(0.0, |acc, c| acc + c.timeline.points_or_zero())
}

fn join<T: ToString>(values: &[T], sep: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

fn cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl Tabular for BacklogRow {
    const HEADERS: &'static [&'static str] = &[
        "number",
        "title",
        "state",
        "url",
        "sprint",
        "points",
        "todo_at",
        "doing_at",
        "done_at",
        "lead_time",
        "cycle_time",
    ];

    fn record(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.title.clone(),
            self.state.to_string(),
            self.url.clone(),
            self.sprint.clone(),
            cell(&self.points),
            self.todo_at.clone(),
            cell(&self.doing_at),
            cell(&self.done_at),
            cell(&self.lead_time),
            cell(&self.cycle_time),
        ]
    }
}

impl Tabular for SkippedRow {
    const HEADERS: &'static [&'static str] = &["number", "title", "state", "url"];

    fn record(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.title.clone(),
            self.state.to_string(),
            self.url.clone(),
        ]
    }
}

impl Tabular for SprintRow {
    const HEADERS: &'static [&'static str] = &[
        "number",
        "started_at",
        "ended_at",
        "total_issues",
        "total_points",
        "throughput",
        "velocity",
    ];

    fn record(&self) -> Vec<String> {
        vec![
            self.number.to_string(),
            self.started_at.to_string(),
            self.ended_at.to_string(),
            self.total_issues.to_string(),
            self.total_points.to_string(),
            self.throughput.to_string(),
            self.velocity.to_string(),
        ]
    }
}

impl Tabular for DailyRow {
    const HEADERS: &'static [&'static str] = &[
        "day",
        "sprint",
        "number_todo",
        "number_doing",
        "number_done",
        "points_doing",
        "points_done",
        "number_wtd",
        "number_wip",
        "number_wdn",
        "points_wip",
        "points_wdn",
    ];

    fn record(&self) -> Vec<String> {
        vec![
            self.day.to_string(),
            cell(&self.sprint),
            self.number_todo.to_string(),
            self.number_doing.to_string(),
            self.number_done.to_string(),
            self.points_doing.to_string(),
            self.points_done.to_string(),
            self.number_wtd.to_string(),
            self.number_wip.to_string(),
            self.number_wdn.to_string(),
            self.points_wip.to_string(),
            self.points_wdn.to_string(),
        ]
    }
}

impl Tabular for AssigneeRow {
    const HEADERS: &'static [&'static str] =
        &["sprint", "user", "total_issues", "total_points", "issues"];

    fn record(&self) -> Vec<String> {
        vec![
            self.sprint.to_string(),
            self.user.clone(),
            self.total_issues.to_string(),
            self.total_points.to_string(),
            self.issues.clone(),
        ]
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
