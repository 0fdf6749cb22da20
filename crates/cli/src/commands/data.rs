// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `read` and `count`, both answered by generated SQL jobs.

use crate::context::{Backends, Console};
use crate::grammar::QualifiedName;
use oc_core::{JobConfig, JobKind};
use oc_grammar::PartitionSpec;

/// Rows returned by `read` without an explicit count.
const DEFAULT_READ_LINES: u64 = 10;

impl<B: Backends> Console<B> {
    pub(crate) async fn read(
        &self,
        table: &QualifiedName,
        columns: &[String],
        partition: Option<&PartitionSpec>,
        limit: Option<u64>,
    ) -> anyhow::Result<()> {
        let statement = read_statement(table, columns, partition, limit);
        self.submit_job(JobConfig::new(JobKind::Sql, statement)).await
    }

    pub(crate) async fn count(
        &self,
        table: &QualifiedName,
        partition: Option<&PartitionSpec>,
    ) -> anyhow::Result<()> {
        let statement = format!("select count(*) from {table}{};", where_clause(partition));
        self.submit_job(JobConfig::new(JobKind::Sql, statement)).await
    }
}

fn read_statement(
    table: &QualifiedName,
    columns: &[String],
    partition: Option<&PartitionSpec>,
    limit: Option<u64>,
) -> String {
    let columns = if columns.is_empty() {
        "*".to_string()
    } else {
        columns.join(", ")
    };
    format!(
        "select {columns} from {table}{} limit {};",
        where_clause(partition),
        limit.unwrap_or(DEFAULT_READ_LINES)
    )
}

fn where_clause(partition: Option<&PartitionSpec>) -> String {
    let Some(spec) = partition else {
        return String::new();
    };
    let conditions: Vec<String> = spec
        .pairs()
        .iter()
        .map(|(k, v)| format!("{k}='{v}'"))
        .collect();
    format!(" where {}", conditions.join(" and "))
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
