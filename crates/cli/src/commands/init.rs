// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use cadence_core::settings::parse_date;
use chrono::NaiveDate;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{Error, Result};

pub fn run(path: Option<PathBuf>, start: Option<String>, force: bool) -> Result<()> {
    let target = match path {
        Some(p) => p,
        None => std::env::current_dir()?,
    };
    let start = match start {
        Some(s) => parse_date(&s)?,
        None => chrono::Local::now().date_naive(),
    };

    let written = write_config(&target, start, force)?;
    println!("Initialized cadence at {}", written.display());
    println!("Campaign starts {}", start.format("%Y-%m-%d"));
    Ok(())
}

/// Writes a default config into `dir`, refusing to replace an existing
/// file unless `force` is set.
pub fn write_config(dir: &Path, start: NaiveDate, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(Error::AlreadyInitialized(path.display().to_string()));
    }
    std::fs::create_dir_all(dir)?;
    Config::new(start).save(&path)?;
    tracing::debug!(path = %path.display(), "wrote config");
    Ok(path)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
