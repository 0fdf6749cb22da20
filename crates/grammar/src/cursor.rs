// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token cursor used by grammars for keyword matching.

use crate::error::LexerError;
use crate::lexer::{Lexer, Token, TokenKind};

/// Forward-only view over a tokenized statement.
///
/// Keyword comparisons ignore ASCII case and never match quoted words.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Result<Self, LexerError> {
        Ok(Self {
            source,
            tokens: Lexer::tokenize(source)?,
            pos: 0,
        })
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.pos + n)
    }

    pub fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn at_keyword(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(keyword))
    }

    /// Lookahead for a keyword sequence without consuming.
    pub fn at_keywords(&self, keywords: &[&str]) -> bool {
        keywords
            .iter()
            .enumerate()
            .all(|(i, kw)| self.peek_nth(i).is_some_and(|t| t.is_keyword(kw)))
    }

    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let hit = self.at_keyword(keyword);
        if hit {
            self.pos += 1;
        }
        hit
    }

    /// Consume the whole sequence, or nothing.
    pub fn eat_keywords(&mut self, keywords: &[&str]) -> bool {
        let hit = self.at_keywords(keywords);
        if hit {
            self.pos += keywords.len();
        }
        hit
    }

    /// Consume the first matching keyword of `choices`.
    pub fn eat_one_of(&mut self, choices: &[&'static str]) -> Option<&'static str> {
        let found = choices.iter().copied().find(|kw| self.at_keyword(kw))?;
        self.pos += 1;
        Some(found)
    }

    pub fn eat(&mut self, kind: TokenKind) -> bool {
        let hit = self.peek().is_some_and(|t| t.kind == kind);
        if hit {
            self.pos += 1;
        }
        hit
    }

    pub fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned()?;
        self.pos += 1;
        Some(token)
    }

    /// Next token's text when it is a word.
    pub fn word(&mut self) -> Option<String> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Word => {
                let text = t.text.clone();
                self.pos += 1;
                Some(text)
            }
            _ => None,
        }
    }

    pub fn expect_word(&mut self, what: &str) -> Result<String, String> {
        match self.peek().map(|t| (t.kind, t.text.clone())) {
            Some((TokenKind::Word, text)) => {
                self.pos += 1;
                Ok(text)
            }
            Some((_, text)) => Err(format!("expected {what}, found '{text}'")),
            None => Err(format!("expected {what}")),
        }
    }

    pub fn expect_end(&self) -> Result<(), String> {
        match self.peek() {
            None => Ok(()),
            Some(t) => Err(format!("unexpected '{}'", t.span.slice(self.source))),
        }
    }

    /// Raw source from the current token to the end.
    pub fn rest(&self) -> &'a str {
        match self.peek() {
            Some(t) => self.source.get(t.span.start..).unwrap_or("").trim(),
            None => "",
        }
    }

    /// Consume everything and return the raw remainder.
    pub fn take_rest(&mut self) -> &'a str {
        let rest = self.rest();
        self.pos = self.tokens.len();
        rest
    }

    /// When at `(`, consume through the matching `)` and return the inner tokens.
    pub fn group(&mut self) -> Option<Vec<Token>> {
        if !self.peek().is_some_and(|t| t.kind == TokenKind::LParen) {
            return None;
        }
        let mut depth = 0usize;
        let mut inner = Vec::new();
        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::LParen => {
                    depth += 1;
                    if depth == 1 {
                        continue;
                    }
                }
                TokenKind::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            inner.push(token);
        }
        Some(inner)
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
