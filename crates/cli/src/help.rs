// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Clap styles matching the help color conventions.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with a colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_reports}
  {report}      Write the backlog, sprint, daily and assignee reports
  {timeline}    Show the lifecycle of one issue
  {sprints}     Show the sprint calendar

{header_setup}
  {init}        Write a default cadence.toml
  {schema}      Output JSON Schema for input and outputs
",
        header_reports = colors::header("Reports:"),
        header_setup = colors::header("Setup:"),
        report = colors::literal("report"),
        timeline = colors::literal("timeline"),
        sprints = colors::literal("sprints"),
        init = colors::literal("init"),
        schema = colors::literal("schema"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  cadence init --start 2022-02-24          Create cadence.toml
  cadence sprints                          Check the sprint calendar
  cadence report --input issues.jsonl      Write all five reports
  cadence timeline <number> -i issues.jsonl   Inspect one issue",
    )
}
