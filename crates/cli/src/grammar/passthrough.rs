// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statements forwarded verbatim: security administration and SQL.
//!
//! Both match on leading words only, so they accept text the shared lexer
//! would reject and leave validation to the service.

use crate::command::CommandKind;
use oc_core::SessionContext;
use oc_grammar::{ParseOutcome, Statement};

use ParseOutcome::{NoMatch, Parsed};

/// Leading word pairs of security statements; `None` accepts any second word.
const SECURITY_FORMS: [(&str, Option<&[&str]>); 10] = [
    ("grant", None),
    ("revoke", None),
    ("purge", None),
    ("add", Some(&["user", "role"])),
    ("remove", Some(&["user", "role"])),
    ("drop", Some(&["role"])),
    ("put", Some(&["policy"])),
    ("get", Some(&["policy"])),
    ("show", Some(&["grants"])),
    ("list", Some(&["users", "roles"])),
];

pub const SQL_VERBS: [&str; 13] = [
    "select", "with", "insert", "create", "alter", "drop", "truncate", "update", "delete",
    "merge", "explain", "msck", "analyze",
];

fn leading_words(statement: &Statement) -> (String, String) {
    let mut words = statement
        .normalized
        .split(|c: char| c.is_whitespace() || c == '(')
        .filter(|w| !w.is_empty())
        .map(str::to_ascii_lowercase);
    let first = words.next().unwrap_or_default();
    let second = words.next().unwrap_or_default();
    (first, second)
}

pub(super) fn security(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let (first, second) = leading_words(statement);
    let matched = SECURITY_FORMS.iter().any(|(verb, objects)| {
        *verb == first
            && match objects {
                Some(objects) => objects.contains(&second.as_str()),
                None => true,
            }
    });
    if !matched {
        return NoMatch;
    }
    Parsed(CommandKind::Security {
        statement: statement.normalized.clone(),
    })
}

pub(super) fn sql(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let (first, _) = leading_words(statement);
    if !SQL_VERBS.contains(&first.as_str()) {
        return NoMatch;
    }
    Parsed(CommandKind::Sql {
        statement: statement.normalized.clone(),
    })
}
