// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the cadence CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no config file at {0}\n  hint: run 'cadence init' first or pass --config")]
    ConfigNotFound(String),

    #[error("already initialized at {0}\n  hint: pass --force to overwrite")]
    AlreadyInitialized(String),

    #[error("issue not found: #{0}\n  hint: only issues with a backlog label have a timeline")]
    IssueNotFound(u64),

    #[error("invalid date: '{0}'\n  hint: dates are written as YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid input at line {line}: {reason}")]
    InvalidInput { line: usize, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl From<cadence_core::Error> for Error {
    fn from(err: cadence_core::Error) -> Self {
        use cadence_core::Error as Core;
        match err {
            Core::Io(e) => Error::Io(e),
            Core::Json(e) => Error::Json(e),
            Core::InvalidDate(s) => Error::InvalidDate(s),
            Core::CorruptedData { line, reason } => Error::InvalidInput { line, reason },
            other @ (Core::InvalidSettings(_) | Core::InvalidOffset(_)) => {
                Error::Config(other.to_string())
            }
        }
    }
}

/// A specialized Result type for cadence CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
