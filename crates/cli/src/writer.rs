// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report dataset files.
//!
//! Each dataset is written to `<stamp>_<name>_report.<ext>` in the output
//! directory, either as comma-delimited text with a header line or as a
//! pretty-printed JSON array.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use cadence_core::{Reports, Tabular};
use serde::Serialize;

use crate::cli::ReportFormat;
use crate::error::Result;

const DELIMITER: char = ',';

/// Timestamp format used in file name prefixes.
pub const STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// A dataset file that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub name: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}

impl ReportFormat {
    fn extension(self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

/// File name of one dataset.
pub fn file_name(stamp: &str, name: &str, format: ReportFormat) -> String {
    format!("{}_{}_report.{}", stamp, name, format.extension())
}

/// Writes all five datasets, creating `dir` if needed.
pub fn write_reports(
    reports: &Reports,
    dir: &Path,
    stamp: &str,
    format: ReportFormat,
) -> Result<Vec<Written>> {
    std::fs::create_dir_all(dir)?;
    Ok(vec![
        write_dataset(dir, stamp, "backlog", &reports.backlog, format)?,
        write_dataset(dir, stamp, "skipped", &reports.skipped, format)?,
        write_dataset(dir, stamp, "sprints", &reports.sprints, format)?,
        write_dataset(dir, stamp, "daily", &reports.daily, format)?,
        write_dataset(dir, stamp, "assignees", &reports.assignees, format)?,
    ])
}

/// Writes one dataset and reports where it went.
pub fn write_dataset<R: Tabular + Serialize>(
    dir: &Path,
    stamp: &str,
    name: &'static str,
    rows: &[R],
    format: ReportFormat,
) -> Result<Written> {
    let path = dir.join(file_name(stamp, name, format));
    let mut writer = BufWriter::new(File::create(&path)?);

    match format {
        ReportFormat::Csv => writer.write_all(to_csv(rows).as_bytes())?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    tracing::debug!(dataset = name, rows = rows.len(), path = %path.display(), "wrote dataset");
    Ok(Written {
        name,
        path,
        rows: rows.len(),
    })
}

/// Renders rows as delimited text: a header line, then one line per row.
pub fn to_csv<R: Tabular>(rows: &[R]) -> String {
    let mut out = join_line(R::HEADERS.iter().copied());
    for row in rows {
        let record = row.record();
        out.push_str(&join_line(record.iter().map(String::as_str)));
    }
    out
}

fn join_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push(DELIMITER);
        }
        line.push_str(&escape(cell));
    }
    line.push('\n');
    line
}

/// Quotes a cell holding a delimiter, quote or line break, or one with
/// a leading or trailing space.
fn escape(cell: &str) -> Cow<'_, str> {
    let padded = cell.starts_with(' ') || cell.ends_with(' ');
    if padded || cell.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", cell.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(cell)
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
