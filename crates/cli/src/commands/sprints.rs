// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use cadence_core::{Calendar, Settings};

use crate::cli::OutputFormat;
use crate::config::load_settings;
use crate::display::format_sprint_line;
use crate::error::Result;
use crate::schema::{SprintJson, SprintsOutputJson};

pub fn run(config: Option<PathBuf>, output: OutputFormat) -> Result<()> {
    let settings = load_settings(config)?;
    let calendar = Calendar::build(&settings);
    println!("{}", render(&settings, &calendar, output)?);
    Ok(())
}

/// Renders the calendar as text lines or JSON.
pub fn render(settings: &Settings, calendar: &Calendar, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => {
            if calendar.is_empty() {
                return Ok("No sprints: the campaign ends before it starts".to_string());
            }
            Ok(calendar
                .sprints()
                .iter()
                .map(|s| format_sprint_line(settings, s))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        OutputFormat::Json => {
            let out = SprintsOutputJson {
                sprints: calendar.sprints().iter().map(SprintJson::from).collect(),
            };
            Ok(serde_json::to_string_pretty(&out)?)
        }
    }
}

#[cfg(test)]
#[path = "sprints_tests.rs"]
mod tests;
