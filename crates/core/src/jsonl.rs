// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL (JSON Lines) file utilities.
//!
//! Issue exports are handed over as one JSON object per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::issue::Issue;

/// Reads all records from a JSONL file.
///
/// Skips empty lines. A line that fails to parse is reported with its
/// 1-based line number.
pub fn read_all<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: T = serde_json::from_str(&line).map_err(|e| Error::CorruptedData {
            line: i + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Reads an issue export, ordering each event log chronologically.
pub fn read_issues(path: &Path) -> Result<Vec<Issue>> {
    let mut issues: Vec<Issue> = read_all(path)?;
    for issue in &mut issues {
        issue.sort_events();
    }
    Ok(issues)
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
