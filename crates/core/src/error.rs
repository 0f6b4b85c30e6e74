// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for cadence-core operations.
//!
//! The engine itself never fails: missing data travels as `Option`.
//! These errors come from the edges (settings validation and reading
//! issue exports).

use thiserror::Error;

/// All possible errors that can occur in cadence-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("invalid date: '{0}'\n  hint: dates are written as YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid UTC offset: '{0}'\n  hint: offsets are written as +HH:MM or -HH:MM")]
    InvalidOffset(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data at line {line}: {reason}")]
    CorruptedData { line: usize, reason: String },
}

/// A specialized Result type for cadence-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
