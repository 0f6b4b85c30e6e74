// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use cadence_cli::Cli;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    cadence_cli::logging::setup();
    if let Err(e) = cadence_cli::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
