// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `show` and `list` statements.

use crate::context::{Backends, Console};
use crate::error::ConsoleError;
use crate::grammar::QualifiedName;
use crate::output::render_listing;
use oc_adapters::{ListQuery, MetaApi, ObjectKind};
use oc_grammar::PartitionSpec;

/// Statement sent to the security endpoint for `show securityconfiguration`.
const SECURITY_CONFIGURATION: &str = "show securityconfiguration";

impl<B: Backends> Console<B> {
    pub(crate) async fn show_tables(
        &self,
        project: Option<&str>,
        schema: Option<&str>,
        pattern: Option<&str>,
    ) -> anyhow::Result<()> {
        let mut query = ListQuery::new(ObjectKind::Table, self.project_or_active(project)?);
        query.schema = schema
            .or(self.session.schema())
            .map(String::from);
        query.pattern = pattern.map(String::from);
        self.list_objects(&query).await
    }

    pub(crate) async fn show_partitions(
        &self,
        table: &QualifiedName,
        partition: Option<&PartitionSpec>,
    ) -> anyhow::Result<()> {
        let project = table
            .project_in(&self.session)
            .map_err(ConsoleError::from)?;
        let mut query = ListQuery::new(ObjectKind::Partition, project);
        query.schema = table.schema_in(&self.session);
        query.table = Some(table.name.clone());
        query.partition = partition.map(ToString::to_string);
        self.list_objects(&query).await
    }

    pub(crate) async fn show_schemas(&self, project: Option<&str>) -> anyhow::Result<()> {
        let query = ListQuery::new(ObjectKind::Schema, self.project_or_active(project)?);
        self.list_objects(&query).await
    }

    /// Projects visible to the caller; needs no active project.
    pub(crate) async fn list_projects(&self) -> anyhow::Result<()> {
        let query = ListQuery::new(ObjectKind::Project, "");
        self.list_objects(&query).await
    }

    /// Functions, resources or offline models of a project.
    pub(crate) async fn list(&self, kind: ObjectKind, project: Option<&str>) -> anyhow::Result<()> {
        let query = ListQuery::new(kind, self.project_or_active(project)?);
        self.list_objects(&query).await
    }

    pub(crate) async fn show_security_configuration(&self) -> anyhow::Result<()> {
        let project = self.project()?;
        let output = self
            .meta
            .run_security(&project, SECURITY_CONFIGURATION)
            .await?;
        self.emit(&output);
        Ok(())
    }

    async fn list_objects(&self, query: &ListQuery) -> anyhow::Result<()> {
        let listing = self.meta.list(query).await?;
        tracing::debug!(kind = %query.kind, rows = listing.rows.len(), "listed");
        self.emit(&render_listing(
            &listing,
            self.format(),
            self.options.colorize,
        )?);
        Ok(())
    }

    fn project_or_active(&self, project: Option<&str>) -> Result<String, ConsoleError> {
        match project {
            Some(project) => Ok(project.to_string()),
            None => self.project(),
        }
    }
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
