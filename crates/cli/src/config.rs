// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration loaded from `cadence.toml`.
//!
//! The file holds the backlog labels, the UTC offset used for calendar
//! days, the pipeline names of each workflow stage and the campaign
//! period. It is read once per command and turned into an immutable
//! [`Settings`] value.

use std::path::{Path, PathBuf};

use cadence_core::settings::{default_backlog_labels, parse_date, parse_offset};
use cadence_core::{Campaign, Pipelines, Settings};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "cadence.toml";

/// Project configuration stored in `cadence.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Labels that put an issue in the backlog.
    #[serde(default = "default_backlog_labels")]
    pub backlog_labels: Vec<String>,

    /// Offset such as `+03:00`; calendar days start at local midnight.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,

    #[serde(default)]
    pub pipelines: Pipelines,

    pub campaign: CampaignConfig,
}

/// The `[campaign]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// First day, `YYYY-MM-DD`.
    pub start: String,

    /// Last day, `YYYY-MM-DD`. Left open, the campaign runs until today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    #[serde(default = "default_sprint_days")]
    pub sprint_days: u32,
}

fn default_utc_offset() -> String {
    "+00:00".to_string()
}

fn default_sprint_days() -> u32 {
    7
}

impl Config {
    /// Creates a configuration with default values and an open-ended
    /// campaign starting on `start`.
    pub fn new(start: NaiveDate) -> Self {
        Config {
            backlog_labels: default_backlog_labels(),
            utc_offset: default_utc_offset(),
            pipelines: Pipelines::default(),
            campaign: CampaignConfig {
                start: start.format("%Y-%m-%d").to_string(),
                end: None,
                sprint_days: default_sprint_days(),
            },
        }
    }

    /// Loads configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Saves configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates the configuration and builds run settings.
    ///
    /// `today` closes an open-ended campaign.
    pub fn settings(&self, today: NaiveDate) -> Result<Settings> {
        let offset = parse_offset(&self.utc_offset)?;
        let start = parse_date(&self.campaign.start)?;
        let end = match &self.campaign.end {
            Some(end) => parse_date(end)?,
            None => today,
        };
        let settings = Settings::new(
            self.pipelines.clone(),
            self.backlog_labels.clone(),
            Campaign {
                start,
                end,
                sprint_days: self.campaign.sprint_days,
            },
            offset,
        )?;
        Ok(settings)
    }
}

/// Resolves the configuration path: an explicit `--config`, else
/// `./cadence.toml`.
pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Loads the configuration and builds settings for a run happening now.
pub fn load_settings(explicit: Option<PathBuf>) -> Result<Settings> {
    let path = resolve_path(explicit);
    let config = Config::load(&path)?;
    let offset = parse_offset(&config.utc_offset)?;
    let today = chrono::Utc::now().with_timezone(&offset).date_naive();
    let settings = config.settings(today)?;
    tracing::debug!(
        path = %path.display(),
        start = %settings.campaign.start,
        end = %settings.campaign.end,
        sprint_days = settings.campaign.sprint_days,
        "loaded settings"
    );
    Ok(settings)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
