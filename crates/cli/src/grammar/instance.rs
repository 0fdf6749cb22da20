// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job instance grammars: listing, queue view, status, wait and kill.

use super::names::{cursor, number};
use super::session::single_word;
use crate::command::CommandKind;
use oc_core::{parse_date, JobId, SessionContext};
use oc_grammar::{Cursor, ParseOutcome, Statement};

use ParseOutcome::NoMatch;

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

pub(super) fn show_instances(
    statement: &Statement,
    _: &SessionContext,
) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    let matched = c.eat_keywords(&["show", "instances"])
        || c.eat_keywords(&["ls", "instances"])
        || c.eat_keywords(&["show", "p"]);
    if !matched {
        return NoMatch;
    }
    instance_filter(&mut c).into()
}

fn instance_filter(c: &mut Cursor<'_>) -> Result<CommandKind, String> {
    let mut from_ms = None;
    let mut until_ms = None;
    let mut limit = None;
    while let Some(word) = c.word() {
        match word.to_ascii_lowercase().as_str() {
            "from" => from_ms = Some(date(c)?),
            "to" => until_ms = Some(date(c)? + DAY_MS),
            _ => limit = Some(number(&word, "instance count")?),
        }
    }
    c.expect_end()?;
    if let (Some(from), Some(until)) = (from_ms, until_ms) {
        if from >= until {
            return Err("'from' date is after 'to' date".to_string());
        }
    }
    Ok(CommandKind::ShowInstances {
        from_ms,
        until_ms,
        limit,
    })
}

fn date(c: &mut Cursor<'_>) -> Result<u64, String> {
    let text = c.expect_word("date")?;
    parse_date(&text).ok_or_else(|| format!("invalid date '{text}', expected YYYY-MM-DD"))
}

pub(super) fn top_instance(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !(c.eat_keywords(&["top", "instance"]) || c.eat_keywords(&["top", "instances"])) {
        return NoMatch;
    }
    top_options(&mut c).into()
}

fn top_options(c: &mut Cursor<'_>) -> Result<CommandKind, String> {
    let mut refresh = false;
    let mut limit = None;
    while let Some(word) = c.word() {
        match word.to_ascii_lowercase().as_str() {
            "-d" => refresh = true,
            "-limit" => limit = Some(number(&c.expect_word("limit")?, "limit")?),
            other => return Err(format!("unknown option '{other}'")),
        }
    }
    c.expect_end()?;
    Ok(CommandKind::TopInstance { refresh, limit })
}

pub(super) fn status(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("status") {
        return NoMatch;
    }
    instance_id(&mut c)
        .map(|id| CommandKind::Status { id })
        .into()
}

pub(super) fn wait(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("wait") {
        return NoMatch;
    }
    instance_id(&mut c).map(|id| CommandKind::Wait { id }).into()
}

pub(super) fn kill(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("kill") {
        return NoMatch;
    }
    let sync = c.eat_keyword("-sync");
    instance_id(&mut c)
        .map(|id| CommandKind::Kill { id, sync })
        .into()
}

fn instance_id(c: &mut Cursor<'_>) -> Result<JobId, String> {
    single_word(c, "instance id").map(JobId::new)
}
