// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::span::Span;
use thiserror::Error;

/// Errors raised while tokenizing a statement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("unterminated {quote} quote starting at position {}", span.start)]
    UnterminatedQuote { quote: char, span: Span },

    #[error("unclosed '(' at position {}", span.start)]
    UnclosedParen { span: Span },

    #[error("unexpected ')' at position {}", span.start)]
    UnexpectedCloseParen { span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnterminatedQuote { span, .. }
            | LexerError::UnclosedParen { span }
            | LexerError::UnexpectedCloseParen { span } => *span,
        }
    }
}
