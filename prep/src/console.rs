// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2024 Hyperpolymath

//! Console styles for user-facing messages

use colored::{ColoredString, Colorize};
use std::io::IsTerminal;

/// Named message styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Fatal conditions
    Alert,
    /// Questions and non-fatal problems
    Warn,
    /// Instructions and progress
    Info,
    /// File and directory names inside a message
    File,
}

pub fn styled(text: &str, style: Style) -> ColoredString {
    match style {
        Style::Alert => text.red().bold(),
        Style::Warn => text.yellow(),
        Style::Info => text.cyan(),
        Style::File => text.magenta().underline(),
    }
}

pub fn alert(text: &str) -> ColoredString {
    styled(text, Style::Alert)
}

pub fn warn(text: &str) -> ColoredString {
    styled(text, Style::Warn)
}

pub fn info(text: &str) -> ColoredString {
    styled(text, Style::Info)
}

pub fn file(text: &str) -> ColoredString {
    styled(text, Style::File)
}

/// Disable colours when `NO_COLOR` is set or stdout is not a terminal
pub fn configure_colors() {
    let enabled = std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
    colored::control::set_override(enabled);
}
