// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cadence_cli - command-line front end for cadence-core.
//!
//! Loads `cadence.toml`, reads a JSON Lines issue export, runs the
//! engine and prints or writes its results.
//!
//! # Main Components
//!
//! - [`Config`] - Run configuration (pipelines, labels, campaign, offset)
//! - [`Cli`] / [`Command`] - Parsed command line
//! - [`Error`] - Error types for all commands
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = cadence_cli::Cli::parse();
//! cadence_cli::run(cli.command)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
pub mod logging;
mod schema;
pub mod timings;
mod writer;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, ReportFormat, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

/// Runs one parsed command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path, start, force } => commands::init::run(path, start, force),
        Command::Report {
            input,
            config,
            out_dir,
            format,
        } => commands::report::run(input, config, out_dir, format),
        Command::Sprints { config, output } => commands::sprints::run(config, output),
        Command::Timeline {
            number,
            input,
            config,
            output,
        } => commands::timeline::run(number, input, config, output),
        Command::Schema { command } => commands::schema::run(command),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
