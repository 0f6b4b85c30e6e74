// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase timing instrumentation for debugging.
//!
//! Enable with `CADENCE_TIMINGS=1`.
//! Output goes to stderr in format: `[timings] input::read 3ms`

use std::fmt;
use std::time::Instant;

/// The stages of a cadence run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reading `cadence.toml` and resolving it to settings.
    ConfigLoad,
    /// Parsing the JSONL issue export.
    InputRead,
    /// Classifying issues and assigning sprints.
    EngineRun,
    /// Aggregating the report views.
    ReportsBuild,
    /// Writing the dataset files.
    ReportsWrite,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::ConfigLoad,
        Phase::InputRead,
        Phase::EngineRun,
        Phase::ReportsBuild,
        Phase::ReportsWrite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::ConfigLoad => "config::load",
            Phase::InputRead => "input::read",
            Phase::EngineRun => "engine::run",
            Phase::ReportsBuild => "reports::build",
            Phase::ReportsWrite => "reports::write",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check if timings are enabled via the CADENCE_TIMINGS environment variable.
#[inline]
pub fn timings_enabled() -> bool {
    std::env::var("CADENCE_TIMINGS").is_ok()
}

/// The line printed for a finished phase.
pub fn timing_line(phase: Phase, millis: u128) -> String {
    format!("[timings] {phase} {millis}ms")
}

/// Print a timing result to stderr if timings are enabled.
#[inline]
pub fn print_timing(phase: Phase, start: Instant) {
    let millis = start.elapsed().as_millis();
    tracing::debug!(phase = %phase, elapsed_ms = %millis, "phase done");
    if timings_enabled() {
        eprintln!("{}", timing_line(phase, millis));
    }
}

/// Times a block and reports it under a [`Phase`].
///
/// ```rust,ignore
/// let issues = time_phase!(Phase::InputRead, read_issues(&path))?;
/// ```
#[macro_export]
macro_rules! time_phase {
    ($phase:expr, $block:expr) => {{
        let __start = std::time::Instant::now();
        let __result = $block;
        $crate::timings::print_timing($phase, __start);
        __result
    }};
}

#[cfg(test)]
#[path = "timings_tests.rs"]
mod tests;
