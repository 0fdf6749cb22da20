// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `DESC`/`DESCRIBE` grammars, most specific object kind first.

use super::names::{cursor, eat_describe, expect_name, partition_clause, QualifiedName};
use crate::command::CommandKind;
use oc_adapters::ObjectKind;
use oc_core::SessionContext;
use oc_grammar::{Cursor, ParseOutcome, Statement};

use ParseOutcome::NoMatch;

/// `desc <keywords...> <name>` for one object kind.
fn describe_kind(
    statement: &Statement,
    session: &SessionContext,
    keywords: &[&str],
    kind: ObjectKind,
) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !eat_describe(&mut c) || !c.eat_keywords(keywords) {
        return NoMatch;
    }
    named(&mut c, session, kind, false).into()
}

fn named(
    c: &mut Cursor<'_>,
    session: &SessionContext,
    kind: ObjectKind,
    extended: bool,
) -> Result<CommandKind, String> {
    let name = expect_name(c, &format!("{kind} name"), session)?;
    c.expect_end()?;
    Ok(CommandKind::Describe {
        kind,
        name,
        partition: None,
        extended,
    })
}

pub(super) fn shard(statement: &Statement, session: &SessionContext) -> ParseOutcome<CommandKind> {
    describe_kind(statement, session, &["shard"], ObjectKind::Shard)
}

pub(super) fn serving_table(
    statement: &Statement,
    session: &SessionContext,
) -> ParseOutcome<CommandKind> {
    describe_kind(statement, session, &["serving"], ObjectKind::ServingTable)
}

pub(super) fn instance(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !eat_describe(&mut c) || !c.eat_keyword("instance") {
        return NoMatch;
    }
    super::session::single_word(&mut c, "instance id")
        .map(|id| CommandKind::Describe {
            kind: ObjectKind::Instance,
            name: QualifiedName::bare(id),
            partition: None,
            extended: false,
        })
        .into()
}

/// Project names are never qualified.
pub(super) fn project(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !eat_describe(&mut c) || !c.eat_keyword("project") {
        return NoMatch;
    }
    let extended = c.eat_keyword("-extended");
    super::session::single_word(&mut c, "project name")
        .map(|name| CommandKind::Describe {
            kind: ObjectKind::Project,
            name: QualifiedName {
                project: Some(name.clone()),
                schema: None,
                name,
            },
            partition: None,
            extended,
        })
        .into()
}

pub(super) fn function(statement: &Statement, session: &SessionContext) -> ParseOutcome<CommandKind> {
    describe_kind(statement, session, &["function"], ObjectKind::Function)
}

/// Resource names usually carry a file extension, so they are never split
/// on `.`.
pub(super) fn resource(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !eat_describe(&mut c) || !c.eat_keyword("resource") {
        return NoMatch;
    }
    super::session::single_word(&mut c, "resource name")
        .map(|name| CommandKind::Describe {
            kind: ObjectKind::Resource,
            name: QualifiedName::bare(name),
            partition: None,
            extended: false,
        })
        .into()
}

/// `desc schema [project.]schema`
pub(super) fn schema(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !eat_describe(&mut c) || !c.eat_keyword("schema") {
        return NoMatch;
    }
    schema_name(&mut c).into()
}

fn schema_name(c: &mut Cursor<'_>) -> Result<CommandKind, String> {
    let text = super::session::single_word(c, "schema name")?;
    let name = match text.split_once('.') {
        Some((project, schema)) if !project.is_empty() && !schema.is_empty() => QualifiedName {
            project: Some(project.to_string()),
            schema: None,
            name: schema.to_string(),
        },
        Some(_) => return Err(format!("invalid schema name '{text}'")),
        None => QualifiedName::bare(text),
    };
    Ok(CommandKind::Describe {
        kind: ObjectKind::Schema,
        name,
        partition: None,
        extended: false,
    })
}

pub(super) fn offline_model(
    statement: &Statement,
    session: &SessionContext,
) -> ParseOutcome<CommandKind> {
    describe_kind(statement, session, &["offlinemodel"], ObjectKind::OfflineModel)
}

/// `desc [extended] <table> partition(<spec>)`; no partition clause means
/// the generic table grammar takes it.
pub(super) fn partition(statement: &Statement, session: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !eat_describe(&mut c) {
        return NoMatch;
    }
    let extended = c.eat_keyword("extended");
    let has_partition = c.peek_nth(1).is_some_and(|t| t.is_keyword("partition"));
    if !has_partition {
        return NoMatch;
    }
    table_partition(&mut c, session, extended).into()
}

fn table_partition(
    c: &mut Cursor<'_>,
    session: &SessionContext,
    extended: bool,
) -> Result<CommandKind, String> {
    let name = expect_name(c, "table name", session)?;
    let partition = partition_clause(c)?;
    c.expect_end()?;
    Ok(CommandKind::Describe {
        kind: ObjectKind::Partition,
        name,
        partition,
        extended,
    })
}

pub(super) fn table(statement: &Statement, session: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !eat_describe(&mut c) {
        return NoMatch;
    }
    let extended = c.eat_keyword("extended");
    named(&mut c, session, ObjectKind::Table, extended).into()
}
