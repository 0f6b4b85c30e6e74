// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use cadence_core::Analysis;

use crate::cli::OutputFormat;
use crate::display::format_timeline;
use crate::error::{Error, Result};
use crate::schema::TimelineJson;

pub fn run(
    number: u64,
    input: PathBuf,
    config: Option<PathBuf>,
    output: OutputFormat,
) -> Result<()> {
    let analysis = super::load_analysis(&input, config)?;
    println!("{}", render(&analysis, number, output)?);
    Ok(())
}

/// Renders the timeline of one backlog issue.
pub fn render(analysis: &Analysis, number: u64, output: OutputFormat) -> Result<String> {
    let classified = analysis.find(number).ok_or(Error::IssueNotFound(number))?;
    match output {
        OutputFormat::Text => Ok(format_timeline(&analysis.settings, classified)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&TimelineJson::from(
            classified,
        ))?),
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
