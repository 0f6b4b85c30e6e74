// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint calendar and sprint membership.
//!
//! The calendar slices the campaign into contiguous fixed-length windows.
//! Window bounds are compared inclusively on both ends, so an instant on a
//! boundary belongs to both neighbouring sprints.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::classify::Timeline;
use crate::settings::Settings;

/// A numbered sprint window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sprint {
    /// 1-based sprint number.
    pub number: u32,
    /// Start of the window.
    pub started_at: DateTime<Utc>,
    /// End of the window (start of the next sprint).
    pub ended_at: DateTime<Utc>,
}

impl Sprint {
    /// Returns true if `at` lies within the window, bounds included.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.started_at <= at && at <= self.ended_at
    }

    /// Returns true if the interval `[from, to]` touches the window.
    pub fn overlaps(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        !(self.started_at > to || from > self.ended_at)
    }

    /// Returns true if work started at `from` and still open is active
    /// during the window. Every window from the one containing `from`
    /// onward qualifies, including future ones.
    pub fn is_pending(&self, from: DateTime<Utc>) -> bool {
        from <= self.ended_at
    }
}

/// Ordered, contiguous sprint windows for one campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Calendar {
    sprints: Vec<Sprint>,
}

impl Calendar {
    /// Builds the calendar for the configured campaign.
    pub fn build(settings: &Settings) -> Self {
        let start = settings.midnight(settings.campaign.start);
        let end = settings.midnight(settings.campaign.end);
        Self::from_range(start, end, settings.sprint_length())
    }

    /// Emits windows from `start` while the cursor has not passed `end`.
    ///
    /// The last window may extend past `end`. An empty calendar results
    /// when `start > end` or the length is not positive.
    pub fn from_range(start: DateTime<Utc>, end: DateTime<Utc>, length: TimeDelta) -> Self {
        let mut sprints = Vec::new();
        if length <= TimeDelta::zero() {
            return Calendar { sprints };
        }

        let mut cursor = start;
        let mut number = 1;
        while cursor <= end {
            let ended_at = cursor + length;
            sprints.push(Sprint {
                number,
                started_at: cursor,
                ended_at,
            });
            number += 1;
            cursor = ended_at;
        }
        Calendar { sprints }
    }

    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    pub fn len(&self) -> usize {
        self.sprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprints.is_empty()
    }

    /// First sprint whose window contains `at`.
    pub fn sprint_at(&self, at: DateTime<Utc>) -> Option<&Sprint> {
        self.sprints.iter().find(|s| s.contains(at))
    }

    /// Sprint numbers an issue is active in, ascending.
    ///
    /// Issues that never started have no sprints. Completed issues belong
    /// to every window overlapping `[doing_at, done_at]`; open ones to every
    /// window that has not ended before `doing_at`.
    pub fn assign(&self, timeline: &Timeline) -> Vec<u32> {
        let Some(doing_at) = timeline.doing_at else {
            return Vec::new();
        };

        let mut numbers: Vec<u32> = self
            .sprints
            .iter()
            .filter(|s| match timeline.done_at {
                Some(done_at) => s.overlaps(doing_at, done_at),
                None => s.is_pending(doing_at),
            })
            .map(|s| s.number)
            .collect();
        numbers.sort_unstable();
        numbers.dedup();
        numbers
    }
}

#[cfg(test)]
#[path = "sprint_tests.rs"]
mod tests;
