// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text → [`Command`] resolution.

use super::registry::GRAMMARS;
use crate::command::{Command, CompositeCommand};
use crate::error::ResolveError;
use oc_core::SessionContext;
use oc_grammar::{split_statements, Cursor, ParseOutcome, Statement};

/// Resolve one statement; a trailing `;` is optional.
pub fn resolve(text: &str, session: &SessionContext) -> Result<Command, ResolveError> {
    resolve_statement(Statement::new(text), session)
}

pub fn resolve_statement(
    statement: Statement,
    session: &SessionContext,
) -> Result<Command, ResolveError> {
    if statement.is_empty() {
        return Err(ResolveError::Unrecognized(String::new()));
    }
    for grammar in GRAMMARS {
        match (grammar.parse)(&statement, session) {
            ParseOutcome::NoMatch => continue,
            ParseOutcome::SyntaxError(message) => {
                tracing::debug!(family = grammar.family, %message, "syntax error");
                return Err(ResolveError::Syntax {
                    family: grammar.family,
                    message,
                });
            }
            ParseOutcome::Parsed(kind) => {
                tracing::debug!(family = grammar.family, "resolved");
                return Ok(Command::new(statement, grammar.family, kind));
            }
        }
    }
    // Nothing matched; a lexer failure is the more useful diagnostic.
    if let Err(err) = Cursor::new(&statement.normalized) {
        return Err(ResolveError::Syntax {
            family: "statement",
            message: err.to_string(),
        });
    }
    Err(ResolveError::Unrecognized(statement.normalized))
}

/// Split `text` on `;` and resolve every statement before anything runs.
pub fn resolve_script(
    text: &str,
    session: &SessionContext,
) -> Result<CompositeCommand, ResolveError> {
    let statements = split_statements(text).map_err(|err| ResolveError::Syntax {
        family: "statement",
        message: err.to_string(),
    })?;
    let members = statements
        .into_iter()
        .map(|statement| resolve_statement(statement, session))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CompositeCommand::new(members))
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
