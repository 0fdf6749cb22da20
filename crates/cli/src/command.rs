// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved commands.
//!
//! A [`Command`] is a plain value bound to the statement it came from. The
//! behaviour lives in [`CommandKind`]; `Console::run` matches on it.

use crate::grammar::QualifiedName;
use oc_adapters::{ObjectKind, ResourceKind, SecurityValue};
use oc_core::JobId;
use oc_grammar::{PartitionSpec, Statement};

/// `-D<key>=<value>` parameters in the order given.
pub type Params = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub statement: Statement,
    /// Grammar family that produced this command; also the hook lookup key
    pub family: &'static str,
    pub kind: CommandKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    Quit,
    Help {
        keyword: Option<String>,
    },
    UseQuota {
        name: String,
    },
    UseSchema {
        name: String,
    },
    UseProject {
        project: String,
    },
    Attach {
        session: String,
    },
    Detach,
    WhoAmI,
    /// `None` lists the current aliases
    Alias {
        entry: Option<(String, String)>,
    },
    Unset {
        key: String,
    },
    Set {
        key: String,
        value: String,
    },
    SetSecurity {
        key: String,
        value: SecurityValue,
    },
    SetProject {
        key: String,
        value: String,
    },
    ShowFlags,
    ShowInstances {
        from_ms: Option<u64>,
        /// Exclusive, already advanced past the `to` day
        until_ms: Option<u64>,
        limit: Option<usize>,
    },
    TopInstance {
        refresh: bool,
        limit: Option<usize>,
    },
    Status {
        id: JobId,
    },
    Wait {
        id: JobId,
    },
    Kill {
        id: JobId,
        sync: bool,
    },
    Describe {
        kind: ObjectKind,
        name: QualifiedName,
        partition: Option<PartitionSpec>,
        extended: bool,
    },
    ShowTables {
        project: Option<String>,
        schema: Option<String>,
        pattern: Option<String>,
    },
    ShowPartitions {
        table: QualifiedName,
        partition: Option<PartitionSpec>,
    },
    ShowSchemas {
        project: Option<String>,
    },
    ListProjects,
    /// Functions, resources and offline models
    List {
        kind: ObjectKind,
        project: Option<String>,
    },
    ShowSecurityConfiguration,
    AddResource {
        kind: ResourceKind,
        source: String,
        partition: Option<PartitionSpec>,
        alias: Option<String>,
        comment: Option<String>,
        overwrite: bool,
    },
    DropResource {
        name: String,
    },
    DropOfflineModel {
        name: String,
        if_exists: bool,
    },
    Read {
        table: QualifiedName,
        columns: Vec<String>,
        partition: Option<PartitionSpec>,
        limit: Option<u64>,
    },
    Count {
        table: QualifiedName,
        partition: Option<PartitionSpec>,
    },
    Pai {
        algorithm: String,
        project: Option<String>,
        params: Params,
    },
    RunWorkflow {
        name: String,
        params: Params,
    },
    Security {
        statement: String,
    },
    Sql {
        statement: String,
    },
    /// Built only by the `audit` hook
    Audit {
        statement: String,
    },
}

/// Verbs that destroy data or permissions.
const DESTRUCTIVE_VERBS: [&str; 4] = ["drop", "delete", "remove", "purge"];

impl Command {
    pub fn new(statement: Statement, family: &'static str, kind: CommandKind) -> Self {
        Self {
            statement,
            family,
            kind,
        }
    }

    /// Whether interactive mode asks before running this command.
    pub fn needs_confirmation(&self) -> bool {
        match &self.kind {
            CommandKind::DropResource { .. } | CommandKind::DropOfflineModel { .. } => true,
            CommandKind::Sql { statement } | CommandKind::Security { statement } => {
                is_destructive(statement)
            }
            _ => false,
        }
    }
}

fn is_destructive(statement: &str) -> bool {
    let lower = statement.to_ascii_lowercase();
    let mut words = lower.split_whitespace();
    let first = words.next().unwrap_or("");
    if DESTRUCTIVE_VERBS.contains(&first) {
        return true;
    }
    match first {
        "put" => words.next() == Some("policy"),
        "alter" => {
            let rest: Vec<&str> = words.collect();
            rest.first() == Some(&"table")
                && rest.windows(2).any(|w| w == ["drop", "partition"])
        }
        _ => false,
    }
}

/// Ordered statements run as one unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeCommand {
    pub members: Vec<Command>,
}

impl CompositeCommand {
    pub fn new(members: Vec<Command>) -> Self {
        Self { members }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
