// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Statements and keywords: light grey
    pub const LITERAL: u8 = 250;
    /// Hints and usage descriptions: medium grey
    pub const CONTEXT: u8 = 245;

    #[cfg(test)]
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    #[cfg(test)]
    pub const LITERAL_START: &str = "\x1b[38;5;250m";
    #[cfg(test)]
    pub const RESET: &str = "\x1b[0m";
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables, `COLOR=1` forces, otherwise TTY check.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

/// Builder for the in-console `help` text.
pub struct HelpPrinter {
    buf: String,
    colorize: bool,
}

impl HelpPrinter {
    pub fn new() -> Self {
        Self::with_color(should_colorize())
    }

    pub fn with_color(colorize: bool) -> Self {
        Self {
            buf: String::new(),
            colorize,
        }
    }

    pub fn header(&mut self, label: &str) {
        self.line(codes::HEADER, label);
    }

    /// Usage line for one statement form, indented under its family.
    pub fn usage(&mut self, usage: &str) {
        use std::fmt::Write;
        if self.colorize {
            let _ = writeln!(self.buf, "  {}{usage}{RESET}", fg256(codes::LITERAL));
        } else {
            let _ = writeln!(self.buf, "  {usage}");
        }
    }

    pub fn hint(&mut self, text: &str) {
        self.line(codes::CONTEXT, text);
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn line(&mut self, code: u8, text: &str) {
        use std::fmt::Write;
        if self.colorize {
            let _ = writeln!(self.buf, "{}{text}{RESET}", fg256(code));
        } else {
            let _ = writeln!(self.buf, "{text}");
        }
    }
}

pub(crate) fn apply_header(text: &str) -> String {
    format!("{}{}{}", fg256(codes::HEADER), text, RESET)
}

pub(crate) fn apply_muted(text: &str) -> String {
    format!("{}{}{}", fg256(codes::CONTEXT), text, RESET)
}

/// Color a job or task status by meaning.
///
/// Green for success/running, yellow for queued states, red for failures.
/// Unknown words are left alone.
pub(crate) fn apply_status(text: &str) -> String {
    let lower = text.trim_start().to_lowercase();
    let first_word = lower
        .split(|c: char| !c.is_alphabetic())
        .next()
        .unwrap_or("");
    let code = match first_word {
        "success" | "running" | "terminated" | "true" => "\x1b[32m",
        "submitted" | "waiting" | "suspended" | "queued" => "\x1b[33m",
        "failed" | "cancelled" | "false" => "\x1b[31m",
        _ => return text.to_string(),
    };
    format!("{code}{text}{RESET}")
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
