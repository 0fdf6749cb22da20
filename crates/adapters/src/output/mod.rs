// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result and progress channels

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{MemorySink, SinkLine};

use std::io::{IsTerminal, Write};

/// ANSI sequence: move cursor to top-left.
const CURSOR_HOME: &str = "\x1B[H";

/// ANSI sequence: clear from cursor to end of screen.
const CLEAR_TO_END: &str = "\x1B[J";

/// Where command output goes.
///
/// Results are the data a statement produces; progress carries job ids,
/// status lines and warnings. Frames replace the previous frame in place
/// when the terminal allows it.
pub trait OutputSink: Clone + Send + Sync + 'static {
    fn result(&self, text: &str);
    fn progress(&self, text: &str);
    fn frame(&self, text: &str);
}

/// Results to stdout, progress to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl OutputSink for ConsoleSink {
    fn result(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{text}");
    }

    fn progress(&self, text: &str) {
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "{text}");
    }

    fn frame(&self, text: &str) {
        let stdout = std::io::stdout();
        let rendered = render_frame(text, stdout.is_terminal());
        let mut out = stdout.lock();
        let _ = write!(out, "{rendered}");
        let _ = out.flush();
    }
}

fn render_frame(content: &str, is_tty: bool) -> String {
    let body = if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{content}\n")
    };
    if is_tty {
        format!("{CURSOR_HOME}{body}{CLEAR_TO_END}")
    } else {
        body
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
