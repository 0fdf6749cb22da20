// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statement normalization and splitting.

use crate::error::LexerError;
use crate::quote::{scan, unterminated, Scan};
use crate::span::Span;

/// One logical unit of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Original text, trimmed
    pub raw: String,
    /// Comments stripped, whitespace collapsed outside quotes, no terminator
    pub normalized: String,
}

impl Statement {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.trim().to_string(),
            normalized: normalize(raw),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Normalize a single statement.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for (_, c, role) in scan(raw) {
        if role == Scan::Structural && c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }
    while out.ends_with(';') || out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Split input on `;` outside quotes and comments. Empty statements are dropped.
pub fn split_statements(input: &str) -> Result<Vec<Statement>, LexerError> {
    if let Some((quote, start)) = unterminated(input) {
        return Err(LexerError::UnterminatedQuote {
            quote,
            span: Span::new(start, input.len()),
        });
    }

    let mut statements = Vec::new();
    let mut start = 0;
    for (pos, c, role) in scan(input) {
        if role == Scan::Structural && c == ';' {
            push_statement(&mut statements, &input[start..pos]);
            start = pos + 1;
        }
    }
    push_statement(&mut statements, &input[start..]);
    Ok(statements)
}

fn push_statement(statements: &mut Vec<Statement>, raw: &str) {
    let statement = Statement::new(raw);
    if !statement.is_empty() {
        statements.push(statement);
    }
}

/// Accumulates interactive input lines until a statement terminator.
#[derive(Debug, Default, Clone)]
pub struct StatementBuffer {
    text: String,
}

impl StatementBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the last structural character is an unquoted `;`.
    pub fn is_complete(&self) -> bool {
        scan(&self.text)
            .filter(|(_, c, role)| !(*role == Scan::Structural && c.is_whitespace()))
            .last()
            .is_some_and(|(_, c, role)| role == Scan::Structural && c == ';')
    }

    /// Take the buffered text if it forms complete statements.
    pub fn take_complete(&mut self) -> Option<String> {
        if self.is_complete() {
            Some(std::mem::take(&mut self.text))
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
