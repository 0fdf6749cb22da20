// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument pieces shared by several grammars.

use oc_core::{SessionContext, SessionError};
use oc_grammar::{Cursor, PartitionSpec, Statement, TokenKind};
use std::fmt;

/// Object name with optional project and schema qualifiers.
///
/// `a` is a bare name, `a.b` is `project.name` (or `schema.name` when the
/// session has namespace schemas enabled) and `a.b.c` is
/// `project.schema.name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualifiedName {
    pub project: Option<String>,
    pub schema: Option<String>,
    pub name: String,
}

impl QualifiedName {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn parse(text: &str, session: &SessionContext) -> Result<Self, String> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(format!("invalid object name '{text}'"));
        }
        let owned = |s: &str| Some(s.to_string());
        match parts.as_slice() {
            [name] => Ok(Self::bare(*name)),
            [schema, name] if session.namespace_schema => Ok(Self {
                project: None,
                schema: owned(schema),
                name: name.to_string(),
            }),
            [project, name] => Ok(Self {
                project: owned(project),
                schema: None,
                name: name.to_string(),
            }),
            [project, schema, name] => Ok(Self {
                project: owned(project),
                schema: owned(schema),
                name: name.to_string(),
            }),
            _ => Err(format!("invalid object name '{text}', too many qualifiers")),
        }
    }

    /// Explicit project, else the session's active project.
    pub fn project_in<'a>(&'a self, session: &'a SessionContext) -> Result<&'a str, SessionError> {
        match &self.project {
            Some(project) => Ok(project),
            None => session.require_project(),
        }
    }

    pub fn schema_in(&self, session: &SessionContext) -> Option<String> {
        self.schema
            .clone()
            .or_else(|| session.schema().map(String::from))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(project) = &self.project {
            write!(f, "{project}.")?;
        }
        if let Some(schema) = &self.schema {
            write!(f, "{schema}.")?;
        }
        f.write_str(&self.name)
    }
}

/// Tokenize a statement; text the lexer rejects matches no specific grammar.
pub(crate) fn cursor(statement: &Statement) -> Option<Cursor<'_>> {
    Cursor::new(&statement.normalized).ok()
}

/// Eat `desc` or `describe`.
pub(crate) fn eat_describe(c: &mut Cursor<'_>) -> bool {
    c.eat_one_of(&["desc", "describe"]).is_some()
}

pub(crate) fn expect_name(
    c: &mut Cursor<'_>,
    what: &str,
    session: &SessionContext,
) -> Result<QualifiedName, String> {
    let text = c.expect_word(what)?;
    QualifiedName::parse(&text, session)
}

/// Optional `partition(<spec>)` clause.
pub(crate) fn partition_clause(c: &mut Cursor<'_>) -> Result<Option<PartitionSpec>, String> {
    if !c.eat_keyword("partition") {
        return Ok(None);
    }
    let tokens = c
        .group()
        .ok_or_else(|| "expected '(' after partition".to_string())?;
    PartitionSpec::from_tokens(&tokens).map(Some)
}

/// Optional `in <project>` clause.
pub(crate) fn in_project(c: &mut Cursor<'_>) -> Result<Option<String>, String> {
    if c.eat_keyword("in") {
        return c.expect_word("project name").map(Some);
    }
    Ok(None)
}

/// Split `key=value`, trimming both sides. The value may be empty.
pub(crate) fn key_value(text: &str) -> Result<(String, String), String> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected <key>=<value>, found '{text}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{text}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Parse a `-D<key>=<value>` token, gluing comma-separated continuations
/// (`-Dcols=a,b,c`) back into one value.
pub(crate) fn define_param(c: &mut Cursor<'_>, first: &str) -> Result<(String, String), String> {
    let body = first
        .strip_prefix("-D")
        .ok_or_else(|| format!("unexpected '{first}'"))?;
    let mut text = body.to_string();
    while c.peek().is_some_and(|t| t.kind == TokenKind::Comma) {
        c.eat(TokenKind::Comma);
        text.push(',');
        if let Some(word) = c.word() {
            text.push_str(&word);
        }
    }
    key_value(&text)
}

/// Parse a number argument.
pub(crate) fn number<T: std::str::FromStr>(text: &str, what: &str) -> Result<T, String> {
    text.parse()
        .map_err(|_| format!("invalid {what} '{text}', expected a number"))
}

#[cfg(test)]
#[path = "names_tests.rs"]
mod tests;
