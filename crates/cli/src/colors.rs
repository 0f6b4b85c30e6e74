// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output.
//!
//! `NO_COLOR=1` disables colors; `COLOR=1` forces them without a TTY.

use std::io::IsTerminal;

/// ANSI 256-color codes used in help output.
pub mod codes {
    /// Section headers.
    pub const HEADER: u8 = 74;
    /// Commands and flags.
    pub const LITERAL: u8 = 250;
    /// Placeholders and descriptions of values.
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples block.
///
/// Lines ending in `:` are headers. Other lines are split where two
/// spaces separate the command from its description; the command is
/// painted as a literal with `<placeholders>` dimmed.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match trimmed.find("  ") {
                Some(split) => {
                    let (cmd, desc) = trimmed.split_at(split);
                    format!("{indent}{}{desc}", colorize_command(cmd))
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize one command: words as literals, `<placeholders>` as context.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.starts_with('<') && word.ends_with('>') {
                context(word)
            } else if word.is_empty() {
                String::new()
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
