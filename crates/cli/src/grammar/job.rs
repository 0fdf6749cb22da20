// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Statements that become remote jobs: data shortcuts, ML and workflows.

use super::names::{cursor, define_param, expect_name, number, partition_clause};
use crate::command::{CommandKind, Params};
use oc_core::SessionContext;
use oc_grammar::{Cursor, ParseOutcome, Statement, TokenKind};

use ParseOutcome::NoMatch;

/// `read <table> [(cols)] [partition(<spec>)] [<n>]`
pub(super) fn read(statement: &Statement, session: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("read") {
        return NoMatch;
    }
    read_args(&mut c, session).into()
}

fn read_args(c: &mut Cursor<'_>, session: &SessionContext) -> Result<CommandKind, String> {
    let table = expect_name(c, "table name", session)?;
    let columns = match c.group() {
        Some(tokens) => {
            let columns: Vec<String> = tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Word)
                .map(|t| t.text.clone())
                .collect();
            if columns.is_empty() {
                return Err("empty column list".to_string());
            }
            columns
        }
        None => Vec::new(),
    };
    let partition = partition_clause(c)?;
    let limit = match c.word() {
        Some(word) => Some(number(&word, "line count")?),
        None => None,
    };
    c.expect_end()?;
    Ok(CommandKind::Read {
        table,
        columns,
        partition,
        limit,
    })
}

/// `count <table> [partition(<spec>)]`
pub(super) fn count(statement: &Statement, session: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("count") {
        return NoMatch;
    }
    count_args(&mut c, session).into()
}

fn count_args(c: &mut Cursor<'_>, session: &SessionContext) -> Result<CommandKind, String> {
    let table = expect_name(c, "table name", session)?;
    let partition = partition_clause(c)?;
    c.expect_end()?;
    Ok(CommandKind::Count { table, partition })
}

/// `pai -name <algo> [-project <p>] -D<k>=<v> ...`
pub(super) fn pai(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("pai") {
        return NoMatch;
    }
    pai_args(&mut c).into()
}

fn pai_args(c: &mut Cursor<'_>) -> Result<CommandKind, String> {
    let mut algorithm = None;
    let mut project = None;
    let mut params = Params::new();
    while let Some(word) = c.word() {
        if word.eq_ignore_ascii_case("-name") {
            algorithm = Some(c.expect_word("algorithm name")?);
        } else if word.eq_ignore_ascii_case("-project") {
            project = Some(c.expect_word("project name")?);
        } else {
            params.push(define_param(c, &word)?);
        }
    }
    c.expect_end()?;
    let algorithm = algorithm.ok_or_else(|| "missing -name <algorithm>".to_string())?;
    Ok(CommandKind::Pai {
        algorithm,
        project,
        params,
    })
}

/// `run workflow <name> [-D<k>=<v> ...]`
pub(super) fn run_workflow(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["run", "workflow"]) {
        return NoMatch;
    }
    workflow_args(&mut c).into()
}

fn workflow_args(c: &mut Cursor<'_>) -> Result<CommandKind, String> {
    let name = c.expect_word("workflow name")?;
    let mut params = Params::new();
    while let Some(word) = c.word() {
        params.push(define_param(c, &word)?);
    }
    c.expect_end()?;
    Ok(CommandKind::RunWorkflow { name, params })
}
