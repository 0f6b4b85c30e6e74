// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Filtered by `CADENCE_LOG` (same syntax as `RUST_LOG`), default `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CADENCE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `CADENCE_LOG`, falling back to `warn`.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the stderr subscriber. Later calls are no-ops.
pub fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
