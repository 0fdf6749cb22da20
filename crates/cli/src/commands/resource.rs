// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource and offline model management.

use crate::context::{Backends, Console};
use crate::error::ConsoleError;
use oc_adapters::{MetaApi, ObjectKind, ObjectRef, OutputSink, ResourceKind, ResourceSpec};
use oc_grammar::PartitionSpec;
use std::path::Path;

impl<B: Backends> Console<B> {
    /// Assemble an upload. File-backed kinds must name an existing local file.
    pub(crate) fn resource_spec(
        &self,
        kind: ResourceKind,
        source: &str,
        partition: Option<&PartitionSpec>,
        alias: Option<&str>,
        comment: Option<&str>,
        overwrite: bool,
    ) -> anyhow::Result<ResourceSpec> {
        let project = self.project()?;
        if kind != ResourceKind::Table && !Path::new(source).is_file() {
            return Err(ConsoleError::domain(format!("file not found: {source}")).into());
        }
        Ok(ResourceSpec {
            kind,
            project,
            source: source.to_string(),
            partition: partition.map(ToString::to_string),
            alias: alias.map(String::from),
            comment: comment.map(String::from),
            overwrite,
        })
    }

    pub(crate) async fn add_resource(&self, spec: &ResourceSpec) -> anyhow::Result<()> {
        self.meta.add_resource(spec).await?;
        tracing::info!(kind = %spec.kind, name = spec.name(), "resource added");
        self.sink.progress(&format!("OK: {} '{}' added", spec.kind, spec.name()));
        Ok(())
    }

    pub(crate) async fn drop_resource(&self, name: &str) -> anyhow::Result<()> {
        let target = ObjectRef::new(ObjectKind::Resource, self.project()?, name);
        self.meta.drop(&target, false).await?;
        self.sink.progress("OK");
        Ok(())
    }

    pub(crate) async fn drop_offline_model(&self, name: &str, if_exists: bool) -> anyhow::Result<()> {
        let target = ObjectRef::new(ObjectKind::OfflineModel, self.project()?, name);
        self.meta.drop(&target, if_exists).await?;
        self.sink.progress("OK");
        Ok(())
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
