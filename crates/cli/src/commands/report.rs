// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command: run the engine and write the five datasets.

use std::path::{Path, PathBuf};

use cadence_core::{Analysis, Reports};
use chrono::Utc;

use crate::cli::ReportFormat;
use crate::display::format_written;
use crate::error::Result;
use crate::timings::Phase;
use crate::writer::{write_reports, Written, STAMP_FORMAT};

pub fn run(
    input: PathBuf,
    config: Option<PathBuf>,
    out_dir: PathBuf,
    format: ReportFormat,
) -> Result<()> {
    let analysis = super::load_analysis(&input, config)?;
    let stamp = Utc::now()
        .with_timezone(&analysis.settings.offset)
        .format(STAMP_FORMAT)
        .to_string();

    for written in write_all(&analysis, &out_dir, &stamp, format)? {
        println!("{}", format_written(&written));
    }
    Ok(())
}

/// Builds every view of an analysis and writes them under `out_dir`.
pub fn write_all(
    analysis: &Analysis,
    out_dir: &Path,
    stamp: &str,
    format: ReportFormat,
) -> Result<Vec<Written>> {
    let reports = crate::time_phase!(Phase::ReportsBuild, Reports::build(analysis));
    let written = crate::time_phase!(
        Phase::ReportsWrite,
        write_reports(&reports, out_dir, stamp, format)
    )?;
    tracing::info!(
        out_dir = %out_dir.display(),
        files = written.len(),
        "reports written"
    );
    Ok(written)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
