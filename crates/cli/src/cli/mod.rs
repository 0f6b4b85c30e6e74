// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands printing to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// File format of the written reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Parser)]
#[command(name = "cadence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Sprint flow metrics from issue board history")]
#[command(
    long_about = "Sprint flow metrics from issue board history.\n\n\
    Reconstructs when each backlog issue entered todo, doing and done, places it in \
    fixed-length sprints, and writes backlog, sprint, daily and assignee reports."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a default cadence.toml
    #[command(after_help = colors::examples("\
Examples:
  cadence init                          Campaign starting today
  cadence init --start 2022-02-24       Campaign with a fixed start
  cadence init --path config --force    Overwrite config/cadence.toml"))]
    Init {
        /// Directory to write cadence.toml into (default: current directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// First campaign day, YYYY-MM-DD (default: today)
        #[arg(long)]
        start: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Write the backlog, skipped, sprints, daily and assignees reports
    #[command(after_help = colors::examples("\
Examples:
  cadence report -i issues.jsonl                     Write CSV files to reports/
  cadence report -i issues.jsonl --out-dir out       Write to another directory
  cadence report -i issues.jsonl --format json       Write JSON arrays instead
  cadence report -i issues.jsonl -c team.toml        Use another config file"))]
    Report {
        /// Issue export, one JSON object per line
        #[arg(long, short)]
        input: PathBuf,

        /// Config file (default: ./cadence.toml)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Directory for the report files
        #[arg(long, default_value = "reports")]
        out_dir: PathBuf,

        /// File format
        #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,
    },

    /// Show the sprint calendar
    #[command(after_help = colors::examples("\
Examples:
  cadence sprints              List sprint windows
  cadence sprints -o json      Output as JSON"))]
    Sprints {
        /// Config file (default: ./cadence.toml)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show the reconstructed lifecycle of one issue
    #[command(after_help = colors::examples("\
Examples:
  cadence timeline 12 -i issues.jsonl           Show issue #12
  cadence timeline 12 -i issues.jsonl -o json   Output as JSON"))]
    Timeline {
        /// Issue number
        number: u64,

        /// Issue export, one JSON object per line
        #[arg(long, short)]
        input: PathBuf,

        /// Config file (default: ./cadence.toml)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Output JSON Schema for the issue export and JSON outputs
    #[command(after_help = colors::examples("\
Examples:
  cadence schema issue       Schema of one issue export line
  cadence schema timeline    Schema of timeline -o json
  cadence schema sprints     Schema of sprints -o json"))]
    Schema {
        #[command(subcommand)]
        command: SchemaCommand,
    },
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// One line of the issue export
    Issue,
    /// Output of `cadence timeline -o json`
    Timeline,
    /// Output of `cadence sprints -o json`
    Sprints,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
