// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `show ...` / `list ...` metadata listings.

use super::names::{cursor, expect_name, in_project, partition_clause};
use crate::command::CommandKind;
use oc_adapters::ObjectKind;
use oc_core::SessionContext;
use oc_grammar::{Cursor, ParseOutcome, Statement};

use ParseOutcome::NoMatch;

pub(super) fn show_tables(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["show", "tables"]) {
        return NoMatch;
    }
    tables_args(&mut c).into()
}

fn tables_args(c: &mut Cursor<'_>) -> Result<CommandKind, String> {
    let (project, schema) = match in_project(c)? {
        Some(target) => match target.split_once('.') {
            Some((p, s)) if !p.is_empty() && !s.is_empty() => {
                (Some(p.to_string()), Some(s.to_string()))
            }
            Some(_) => return Err(format!("invalid project '{target}'")),
            None => (Some(target), None),
        },
        None => (None, None),
    };
    let pattern = if c.eat_keyword("like") {
        Some(c.expect_word("pattern")?)
    } else {
        None
    };
    c.expect_end()?;
    Ok(CommandKind::ShowTables {
        project,
        schema,
        pattern,
    })
}

pub(super) fn show_partitions(
    statement: &Statement,
    session: &SessionContext,
) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["show", "partitions"]) {
        return NoMatch;
    }
    partitions_args(&mut c, session).into()
}

fn partitions_args(c: &mut Cursor<'_>, session: &SessionContext) -> Result<CommandKind, String> {
    let table = expect_name(c, "table name", session)?;
    let partition = partition_clause(c)?;
    c.expect_end()?;
    Ok(CommandKind::ShowPartitions { table, partition })
}

pub(super) fn show_schemas(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["show", "schemas"]) {
        return NoMatch;
    }
    in_project(&mut c)
        .and_then(|project| {
            c.expect_end()?;
            Ok(CommandKind::ShowSchemas { project })
        })
        .into()
}

pub(super) fn list_projects(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["list", "projects"]) {
        return NoMatch;
    }
    c.expect_end().map(|()| CommandKind::ListProjects).into()
}

/// `list <plural>` or `show <plural>` with an optional `in <project>`.
fn list_kind(statement: &Statement, plural: &str, kind: ObjectKind) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !(c.eat_keywords(&["list", plural]) || c.eat_keywords(&["show", plural])) {
        return NoMatch;
    }
    in_project(&mut c)
        .and_then(|project| {
            c.expect_end()?;
            Ok(CommandKind::List { kind, project })
        })
        .into()
}

pub(super) fn list_functions(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    list_kind(statement, "functions", ObjectKind::Function)
}

pub(super) fn list_resources(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    list_kind(statement, "resources", ObjectKind::Resource)
}

pub(super) fn list_offline_models(
    statement: &Statement,
    _: &SessionContext,
) -> ParseOutcome<CommandKind> {
    list_kind(statement, "offlinemodels", ObjectKind::OfflineModel)
}

pub(super) fn show_security_configuration(
    statement: &Statement,
    _: &SessionContext,
) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["show", "securityconfiguration"]) {
        return NoMatch;
    }
    c.expect_end()
        .map(|()| CommandKind::ShowSecurityConfiguration)
        .into()
}
