// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod report;
pub mod schema;
pub mod sprints;
pub mod timeline;

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::{Path, PathBuf};

use cadence_core::jsonl::read_issues;
use cadence_core::Analysis;

use crate::config::load_settings;
use crate::error::Result;
use crate::timings::Phase;

/// Loads settings and the issue export, then runs the engine.
pub fn load_analysis(input: &Path, config: Option<PathBuf>) -> Result<Analysis> {
    let settings = crate::time_phase!(Phase::ConfigLoad, load_settings(config))?;
    let issues = crate::time_phase!(Phase::InputRead, read_issues(input))?;
    tracing::info!(issues = issues.len(), input = %input.display(), "read issue export");
    Ok(crate::time_phase!(Phase::EngineRun, Analysis::run(issues, &settings)))
}
