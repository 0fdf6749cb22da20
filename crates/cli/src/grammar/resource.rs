// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource and offline model management.

use super::names::{cursor, partition_clause};
use super::session::single_word;
use crate::command::CommandKind;
use oc_adapters::ResourceKind;
use oc_core::SessionContext;
use oc_grammar::{Cursor, ParseOutcome, Statement};

use ParseOutcome::NoMatch;

const RESOURCE_KINDS: [(&str, ResourceKind); 5] = [
    ("file", ResourceKind::File),
    ("jar", ResourceKind::Jar),
    ("archive", ResourceKind::Archive),
    ("py", ResourceKind::Py),
    ("table", ResourceKind::Table),
];

/// `add <kind> <source> [partition(..)] [as <alias>] [comment '<text>'] [-f]`
///
/// `add user`/`add role` fall through to the security grammar.
pub(super) fn add_resource(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("add") {
        return NoMatch;
    }
    let Some(kind) = RESOURCE_KINDS
        .iter()
        .find(|(kw, _)| c.at_keyword(kw))
        .map(|(_, kind)| *kind)
    else {
        return NoMatch;
    };
    c.next_token();
    add_args(&mut c, kind).into()
}

fn add_args(c: &mut Cursor<'_>, kind: ResourceKind) -> Result<CommandKind, String> {
    let what = if kind == ResourceKind::Table {
        "table name"
    } else {
        "file path"
    };
    let source = c.expect_word(what)?;
    let partition = if kind == ResourceKind::Table {
        partition_clause(c)?
    } else {
        None
    };
    let mut alias = None;
    let mut comment = None;
    let mut overwrite = false;
    while let Some(word) = c.word() {
        match word.to_ascii_lowercase().as_str() {
            "as" => alias = Some(c.expect_word("alias")?),
            "comment" => comment = Some(c.expect_word("comment")?),
            "-f" => overwrite = true,
            other => return Err(format!("unexpected '{other}'")),
        }
    }
    c.expect_end()?;
    Ok(CommandKind::AddResource {
        kind,
        source,
        partition,
        alias,
        comment,
        overwrite,
    })
}

pub(super) fn drop_resource(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["drop", "resource"]) {
        return NoMatch;
    }
    single_word(&mut c, "resource name")
        .map(|name| CommandKind::DropResource { name })
        .into()
}

pub(super) fn drop_offline_model(
    statement: &Statement,
    _: &SessionContext,
) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["drop", "offlinemodel"]) {
        return NoMatch;
    }
    let if_exists = c.eat_keywords(&["if", "exists"]);
    single_word(&mut c, "offline model name")
        .map(|name| CommandKind::DropOfflineModel { name, if_exists })
        .into()
}
