// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grammars that only touch local session state (plus `set` redirects).

use super::names::{cursor, key_value};
use crate::command::CommandKind;
use oc_adapters::SecurityValue;
use oc_core::SessionContext;
use oc_grammar::{ParseOutcome, Statement};

use ParseOutcome::{NoMatch, Parsed};

/// Keys `set` forwards to the project's security configuration.
pub const SECURITY_KEYS: [&str; 7] = [
    "CheckPermissionUsingACL",
    "CheckPermissionUsingPolicy",
    "ObjectCreatorHasAccessPermission",
    "ObjectCreatorHasGrantPermission",
    "LabelSecurity",
    "ProjectProtection",
    "ExternalResourceAccessControl",
];

pub(super) fn quit(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if c.eat_one_of(&["quit", "exit", "q"]).is_some() && c.is_done() {
        return Parsed(CommandKind::Quit);
    }
    NoMatch
}

pub(super) fn help(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("help") {
        return NoMatch;
    }
    let rest = c.take_rest();
    let keyword = (!rest.is_empty()).then(|| rest.to_ascii_lowercase());
    Parsed(CommandKind::Help { keyword })
}

pub(super) fn use_quota(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["use", "quota"]) {
        return NoMatch;
    }
    single_word(&mut c, "quota name")
        .map(|name| CommandKind::UseQuota { name })
        .into()
}

pub(super) fn use_schema(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["use", "schema"]) {
        return NoMatch;
    }
    single_word(&mut c, "schema name")
        .map(|name| CommandKind::UseSchema { name })
        .into()
}

pub(super) fn use_project(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("use") {
        return NoMatch;
    }
    single_word(&mut c, "project name")
        .map(|project| CommandKind::UseProject { project })
        .into()
}

pub(super) fn attach(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if c.eat_keyword("detach") {
        return c.expect_end().map(|()| CommandKind::Detach).into();
    }
    if !c.eat_keyword("attach") {
        return NoMatch;
    }
    single_word(&mut c, "session name")
        .map(|session| CommandKind::Attach { session })
        .into()
}

pub(super) fn whoami(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("whoami") {
        return NoMatch;
    }
    c.expect_end().map(|()| CommandKind::WhoAmI).into()
}

pub(super) fn alias(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("alias") {
        return NoMatch;
    }
    let rest = c.take_rest();
    if rest.is_empty() {
        return Parsed(CommandKind::Alias { entry: None });
    }
    key_value(rest)
        .map(|entry| CommandKind::Alias { entry: Some(entry) })
        .into()
}

pub(super) fn unset(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("unset") {
        return NoMatch;
    }
    single_word(&mut c, "setting key")
        .map(|key| CommandKind::Unset { key })
        .into()
}

pub(super) fn set(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("set") {
        return NoMatch;
    }
    parse_set(c.take_rest()).into()
}

fn parse_set(rest: &str) -> Result<CommandKind, String> {
    let (key, value) = key_value(rest)?;
    match SECURITY_KEYS
        .iter()
        .find(|k| k.eq_ignore_ascii_case(&key))
    {
        Some(canonical) => Ok(CommandKind::SetSecurity {
            value: security_value(canonical, &value)?,
            key: canonical.to_string(),
        }),
        None => Ok(CommandKind::Set { key, value }),
    }
}

/// `true`/`false`, or for two keys a `true WITH ...` payload.
pub(crate) fn security_value(key: &str, value: &str) -> Result<SecurityValue, String> {
    let lower = value.to_ascii_lowercase();
    match lower.as_str() {
        "true" => return Ok(SecurityValue::Flag(true)),
        "false" => return Ok(SecurityValue::Flag(false)),
        _ => {}
    }
    let payload = |prefix: &str| {
        lower
            .starts_with(prefix)
            .then(|| value[prefix.len()..].trim().to_string())
            .filter(|p| !p.is_empty())
    };
    match key {
        "ProjectProtection" => payload("true with exception ")
            .map(|policy| SecurityValue::ProtectionWithException { policy })
            .ok_or_else(|| {
                format!("invalid value '{value}' for {key}, expected true, false or 'true WITH EXCEPTION <policy>'")
            }),
        "ExternalResourceAccessControl" => payload("true with locations ")
            .map(|list| SecurityValue::AccessControlWithLocations {
                locations: list
                    .split(',')
                    .map(|l| l.trim().to_string())
                    .filter(|l| !l.is_empty())
                    .collect(),
            })
            .ok_or_else(|| {
                format!("invalid value '{value}' for {key}, expected true, false or 'true WITH LOCATIONS <list>'")
            }),
        _ => Err(format!("invalid value '{value}' for {key}, expected true or false")),
    }
}

pub(super) fn set_project(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keyword("setproject") {
        return NoMatch;
    }
    key_value(c.take_rest())
        .map(|(key, value)| CommandKind::SetProject { key, value })
        .into()
}

pub(super) fn show_flags(statement: &Statement, _: &SessionContext) -> ParseOutcome<CommandKind> {
    let Some(mut c) = cursor(statement) else {
        return NoMatch;
    };
    if !c.eat_keywords(&["show", "flags"]) {
        return NoMatch;
    }
    c.expect_end().map(|()| CommandKind::ShowFlags).into()
}

/// One word and nothing after it.
pub(super) fn single_word(c: &mut oc_grammar::Cursor<'_>, what: &str) -> Result<String, String> {
    let word = c.expect_word(what)?;
    c.expect_end()?;
    Ok(word)
}
