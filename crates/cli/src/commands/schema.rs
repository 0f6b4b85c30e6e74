// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema for the issue export and the JSON outputs.

use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{input, SprintsOutputJson, TimelineJson};

pub fn run(cmd: SchemaCommand) -> Result<()> {
    println!("{}", render(cmd)?);
    Ok(())
}

pub fn render(cmd: SchemaCommand) -> Result<String> {
    let schema = match cmd {
        SchemaCommand::Issue => schema_for!(input::IssueInput),
        SchemaCommand::Timeline => schema_for!(TimelineJson),
        SchemaCommand::Sprints => schema_for!(SprintsOutputJson),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
