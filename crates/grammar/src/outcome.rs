// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

/// Result of trying one grammar against a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    /// Leading keywords do not belong to this grammar; try the next one
    NoMatch,
    /// Keywords matched but the arguments are malformed; stop trying
    SyntaxError(String),
    Parsed(T),
}

impl<T> ParseOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        match self {
            ParseOutcome::NoMatch => ParseOutcome::NoMatch,
            ParseOutcome::SyntaxError(message) => ParseOutcome::SyntaxError(message),
            ParseOutcome::Parsed(value) => ParseOutcome::Parsed(f(value)),
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, ParseOutcome::NoMatch)
    }
}

/// A grammar that already committed to the statement reports argument
/// errors as [`ParseOutcome::SyntaxError`].
impl<T> From<Result<T, String>> for ParseOutcome<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => ParseOutcome::Parsed(value),
            Err(message) => ParseOutcome::SyntaxError(message),
        }
    }
}
