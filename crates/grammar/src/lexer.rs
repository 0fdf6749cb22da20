// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word-level lexer.
//!
//! A word runs until whitespace or one of `(`, `)`, `,`, `;` outside quotes.
//! Quoted sections inside a word are unquoted in [`Token::text`], so
//! `ds='2024'` lexes to the single word `ds=2024`.

use crate::error::LexerError;
use crate::quote::{QuoteTracker, Scan};
use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    LParen,
    RParen,
    Comma,
    Semicolon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Unquoted text for words, the punctuation character otherwise
    pub text: String,
    pub span: Span,
    /// Word contained at least one quoted section
    pub quoted: bool,
}

impl Token {
    fn punct(kind: TokenKind, c: char, pos: usize) -> Self {
        Self {
            kind,
            text: c.to_string(),
            span: Span::new(pos, pos + c.len_utf8()),
            quoted: false,
        }
    }

    /// Unquoted word equal to `keyword`, ignoring ASCII case.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Word && !self.quoted && self.text.eq_ignore_ascii_case(keyword)
    }
}

pub struct Lexer;

impl Lexer {
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        let mut open_parens: Vec<usize> = Vec::new();
        let mut word: Option<WordBuilder> = None;
        let mut quotes = QuoteTracker::default();

        for (pos, c) in input.char_indices() {
            let scan = quotes.step(pos, c);
            if scan != Scan::Structural {
                let w = word.get_or_insert_with(|| WordBuilder::new(pos));
                w.end = pos + c.len_utf8();
                match scan {
                    Scan::Delimiter => w.quoted = true,
                    Scan::Quoted => w.text.push(c),
                    Scan::Escape | Scan::Structural => {}
                }
                continue;
            }

            let kind = match c {
                '(' => Some(TokenKind::LParen),
                ')' => Some(TokenKind::RParen),
                ',' => Some(TokenKind::Comma),
                ';' => Some(TokenKind::Semicolon),
                _ => None,
            };
            if c.is_whitespace() || kind.is_some() {
                if let Some(w) = word.take() {
                    tokens.push(w.finish());
                }
            }
            match kind {
                Some(TokenKind::LParen) => open_parens.push(pos),
                Some(TokenKind::RParen) => {
                    if open_parens.pop().is_none() {
                        return Err(LexerError::UnexpectedCloseParen {
                            span: Span::new(pos, pos + 1),
                        });
                    }
                }
                _ => {}
            }
            match kind {
                Some(kind) => tokens.push(Token::punct(kind, c, pos)),
                None if c.is_whitespace() => {}
                None => {
                    let w = word.get_or_insert_with(|| WordBuilder::new(pos));
                    w.text.push(c);
                    w.end = pos + c.len_utf8();
                }
            }
        }

        if let Some((quote, start)) = quotes.open() {
            return Err(LexerError::UnterminatedQuote {
                quote,
                span: Span::new(start, input.len()),
            });
        }
        if let Some(start) = open_parens.pop() {
            return Err(LexerError::UnclosedParen {
                span: Span::new(start, start + 1),
            });
        }
        if let Some(w) = word.take() {
            tokens.push(w.finish());
        }
        Ok(tokens)
    }
}

struct WordBuilder {
    start: usize,
    end: usize,
    text: String,
    quoted: bool,
}

impl WordBuilder {
    fn new(start: usize) -> Self {
        Self {
            start,
            end: start,
            text: String::new(),
            quoted: false,
        }
    }

    fn finish(self) -> Token {
        Token {
            kind: TokenKind::Word,
            text: self.text,
            span: Span::new(self.start, self.end),
            quoted: self.quoted,
        }
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
