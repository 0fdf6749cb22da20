// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Statement tokenizer shared by every console grammar.
//!
//! Input flows through three stages:
//!
//! ```text
//! raw text ──split_statements──▶ Statement { raw, normalized }
//!          ──Cursor::new──────▶ Token[] (words, parens, commas)
//!          ──grammar──────────▶ ParseOutcome<Command>
//! ```
//!
//! Normalization strips `--` comments, collapses whitespace outside quotes
//! and drops the terminating `;`. The lexer balances parentheses and honours
//! `'`, `"` and `` ` `` quoting with backslash escapes inside quotes.

mod cursor;
mod error;
mod lexer;
mod normalize;
mod outcome;
mod partition;
mod quote;
pub mod span;

pub use cursor::Cursor;
pub use error::LexerError;
pub use lexer::{Lexer, Token, TokenKind};
pub use normalize::{normalize, split_statements, Statement, StatementBuffer};
pub use outcome::ParseOutcome;
pub use partition::PartitionSpec;
pub use span::Span;
