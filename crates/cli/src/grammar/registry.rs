// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The ordered grammar table.
//!
//! Resolution tries [`GRAMMARS`] top to bottom and the first grammar that
//! parses wins. Order matters wherever verbs overlap:
//!
//! - `use quota` and `use schema` precede `use <project>`
//! - every `desc <kind>` precedes `desc <table> partition(..)`, which
//!   precedes the generic `desc <table>`
//! - `drop resource`/`drop offlinemodel` and the security forms (`drop role`,
//!   `add user`, ...) precede the SQL fallback
//! - `add file|jar|archive|py|table` precedes `add user|role`
//! - SQL is last and matches on its leading verb only

use super::{describe, instance, job, listing, passthrough, resource, session};
use crate::command::CommandKind;
use oc_core::SessionContext;
use oc_grammar::{ParseOutcome, Statement};

pub type ParseFn = fn(&Statement, &SessionContext) -> ParseOutcome<CommandKind>;

/// One statement family.
pub struct Grammar {
    /// Stable family name; reported in syntax errors and used as the hook key
    pub family: &'static str,
    /// Help section heading
    pub section: &'static str,
    /// Words `help <keyword>` finds this family by
    pub keywords: &'static [&'static str],
    pub usage: &'static [&'static str],
    pub parse: ParseFn,
}

pub static GRAMMARS: &[Grammar] = &[
    Grammar {
        family: "quit",
        section: "Session",
        keywords: &["quit", "exit", "q"],
        usage: &["quit | exit | q"],
        parse: session::quit,
    },
    Grammar {
        family: "help",
        section: "Session",
        keywords: &["help"],
        usage: &["help [keyword]"],
        parse: session::help,
    },
    Grammar {
        family: "use_quota",
        section: "Session",
        keywords: &["use", "quota"],
        usage: &["use quota <name>"],
        parse: session::use_quota,
    },
    Grammar {
        family: "use_schema",
        section: "Session",
        keywords: &["use", "schema"],
        usage: &["use schema <name>"],
        parse: session::use_schema,
    },
    Grammar {
        family: "use_project",
        section: "Session",
        keywords: &["use", "project"],
        usage: &["use <project>"],
        parse: session::use_project,
    },
    Grammar {
        family: "attach",
        section: "Session",
        keywords: &["attach", "detach", "session"],
        usage: &["attach <session>", "detach"],
        parse: session::attach,
    },
    Grammar {
        family: "whoami",
        section: "Session",
        keywords: &["whoami"],
        usage: &["whoami"],
        parse: session::whoami,
    },
    Grammar {
        family: "alias",
        section: "Session",
        keywords: &["alias"],
        usage: &["alias [<key>=<value>]"],
        parse: session::alias,
    },
    Grammar {
        family: "unset",
        section: "Session",
        keywords: &["unset", "set"],
        usage: &["unset <key>"],
        parse: session::unset,
    },
    Grammar {
        family: "set",
        section: "Session",
        keywords: &["set", "security", "fallback"],
        usage: &[
            "set <key>=<value>",
            "set ProjectProtection=true WITH EXCEPTION <policy>",
            "set odps.console.fallback.<flag>=true|false",
        ],
        parse: session::set,
    },
    Grammar {
        family: "setproject",
        section: "Session",
        keywords: &["setproject", "set", "project"],
        usage: &["setproject <key>=<value>"],
        parse: session::set_project,
    },
    Grammar {
        family: "show_flags",
        section: "Session",
        keywords: &["show", "flags", "fallback"],
        usage: &["show flags"],
        parse: session::show_flags,
    },
    Grammar {
        family: "show_instances",
        section: "Instances",
        keywords: &["show", "ls", "instance", "instances"],
        usage: &["show instances [from <YYYY-MM-DD>] [to <YYYY-MM-DD>] [<count>]", "show p"],
        parse: instance::show_instances,
    },
    Grammar {
        family: "top_instance",
        section: "Instances",
        keywords: &["top", "instance", "queue"],
        usage: &["top instance [-d] [-limit <n>]"],
        parse: instance::top_instance,
    },
    Grammar {
        family: "status",
        section: "Instances",
        keywords: &["status", "instance"],
        usage: &["status <instance_id>"],
        parse: instance::status,
    },
    Grammar {
        family: "wait",
        section: "Instances",
        keywords: &["wait", "instance"],
        usage: &["wait <instance_id>"],
        parse: instance::wait,
    },
    Grammar {
        family: "kill",
        section: "Instances",
        keywords: &["kill", "instance"],
        usage: &["kill [-sync] <instance_id>"],
        parse: instance::kill,
    },
    Grammar {
        family: "desc_shard",
        section: "Describe",
        keywords: &["desc", "describe", "shard"],
        usage: &["desc shard <table>"],
        parse: describe::shard,
    },
    Grammar {
        family: "desc_serving_table",
        section: "Describe",
        keywords: &["desc", "describe", "serving"],
        usage: &["desc serving <table>"],
        parse: describe::serving_table,
    },
    Grammar {
        family: "desc_instance",
        section: "Describe",
        keywords: &["desc", "describe", "instance"],
        usage: &["desc instance <instance_id>"],
        parse: describe::instance,
    },
    Grammar {
        family: "desc_project",
        section: "Describe",
        keywords: &["desc", "describe", "project"],
        usage: &["desc project [-extended] <project>"],
        parse: describe::project,
    },
    Grammar {
        family: "desc_function",
        section: "Describe",
        keywords: &["desc", "describe", "function"],
        usage: &["desc function <name>"],
        parse: describe::function,
    },
    Grammar {
        family: "desc_resource",
        section: "Describe",
        keywords: &["desc", "describe", "resource"],
        usage: &["desc resource <name>"],
        parse: describe::resource,
    },
    Grammar {
        family: "desc_schema",
        section: "Describe",
        keywords: &["desc", "describe", "schema"],
        usage: &["desc schema [<project>.]<schema>"],
        parse: describe::schema,
    },
    Grammar {
        family: "desc_offline_model",
        section: "Describe",
        keywords: &["desc", "describe", "offlinemodel"],
        usage: &["desc offlinemodel <name>"],
        parse: describe::offline_model,
    },
    Grammar {
        family: "desc_partition",
        section: "Describe",
        keywords: &["desc", "describe", "partition"],
        usage: &["desc [extended] <table> partition(<spec>)"],
        parse: describe::partition,
    },
    Grammar {
        family: "desc_table",
        section: "Describe",
        keywords: &["desc", "describe", "table"],
        usage: &["desc [extended] [<project>.][<schema>.]<table>"],
        parse: describe::table,
    },
    Grammar {
        family: "show_tables",
        section: "Listing",
        keywords: &["show", "tables", "table"],
        usage: &["show tables [in <project>[.<schema>]] [like '<pattern>']"],
        parse: listing::show_tables,
    },
    Grammar {
        family: "show_partitions",
        section: "Listing",
        keywords: &["show", "partitions", "partition"],
        usage: &["show partitions <table> [partition(<spec>)]"],
        parse: listing::show_partitions,
    },
    Grammar {
        family: "show_schemas",
        section: "Listing",
        keywords: &["show", "schemas", "schema"],
        usage: &["show schemas [in <project>]"],
        parse: listing::show_schemas,
    },
    Grammar {
        family: "list_projects",
        section: "Listing",
        keywords: &["list", "projects", "project"],
        usage: &["list projects"],
        parse: listing::list_projects,
    },
    Grammar {
        family: "list_functions",
        section: "Listing",
        keywords: &["list", "show", "functions", "function"],
        usage: &["list functions [in <project>]"],
        parse: listing::list_functions,
    },
    Grammar {
        family: "list_resources",
        section: "Listing",
        keywords: &["list", "show", "resources", "resource"],
        usage: &["list resources [in <project>]"],
        parse: listing::list_resources,
    },
    Grammar {
        family: "list_offline_models",
        section: "Listing",
        keywords: &["list", "show", "offlinemodels", "offlinemodel"],
        usage: &["show offlinemodels [in <project>]"],
        parse: listing::list_offline_models,
    },
    Grammar {
        family: "show_security_configuration",
        section: "Listing",
        keywords: &["show", "securityconfiguration", "security"],
        usage: &["show securityconfiguration"],
        parse: listing::show_security_configuration,
    },
    Grammar {
        family: "add_resource",
        section: "Resources",
        keywords: &["add", "resource", "file", "jar", "archive", "py", "table"],
        usage: &[
            "add file|jar|archive|py <path> [as <alias>] [comment '<text>'] [-f]",
            "add table <table> [partition(<spec>)] [as <alias>] [comment '<text>'] [-f]",
        ],
        parse: resource::add_resource,
    },
    Grammar {
        family: "drop_resource",
        section: "Resources",
        keywords: &["drop", "resource"],
        usage: &["drop resource <name>"],
        parse: resource::drop_resource,
    },
    Grammar {
        family: "drop_offline_model",
        section: "Resources",
        keywords: &["drop", "offlinemodel"],
        usage: &["drop offlinemodel [if exists] <name>"],
        parse: resource::drop_offline_model,
    },
    Grammar {
        family: "read",
        section: "Data",
        keywords: &["read", "table"],
        usage: &["read <table> [(<col>, ...)] [partition(<spec>)] [<lines>]"],
        parse: job::read,
    },
    Grammar {
        family: "count",
        section: "Data",
        keywords: &["count", "table"],
        usage: &["count <table> [partition(<spec>)]"],
        parse: job::count,
    },
    Grammar {
        family: "pai",
        section: "Jobs",
        keywords: &["pai", "xlib", "ml"],
        usage: &["pai -name <algorithm> [-project <project>] -D<key>=<value> ..."],
        parse: job::pai,
    },
    Grammar {
        family: "run_workflow",
        section: "Jobs",
        keywords: &["run", "workflow"],
        usage: &["run workflow <name> [-D<key>=<value> ...]"],
        parse: job::run_workflow,
    },
    Grammar {
        family: "security",
        section: "Security",
        keywords: &[
            "grant", "revoke", "add", "remove", "drop", "put", "get", "policy", "show",
            "list", "purge", "user", "role", "security",
        ],
        usage: &[
            "grant|revoke <privileges> on <object> to|from <principal>",
            "add|remove user|role <name>",
            "drop role <name>",
            "put policy <file> | get policy",
            "show grants [for <principal>]",
            "list users | list roles",
            "purge ...",
        ],
        parse: passthrough::security,
    },
    Grammar {
        family: "sql",
        section: "SQL",
        keywords: &[
            "sql", "select", "with", "insert", "create", "alter", "drop", "truncate",
            "update", "delete", "merge", "explain", "msck", "analyze",
        ],
        usage: &["<SQL statement>;"],
        parse: passthrough::sql,
    },
];

/// Grammars whose help keywords include `keyword`, in resolution order.
pub fn grammars_for(keyword: &str) -> Vec<&'static Grammar> {
    GRAMMARS
        .iter()
        .filter(|g| g.keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword)))
        .collect()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
