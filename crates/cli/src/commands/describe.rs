// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `desc` statements.

use crate::context::{Backends, Console};
use crate::error::ConsoleError;
use crate::grammar::QualifiedName;
use crate::output::render_description;
use oc_adapters::{MetaApi, ObjectKind, ObjectRef};
use oc_grammar::PartitionSpec;

impl<B: Backends> Console<B> {
    /// Describe one object. Everything except `desc project` resolves its
    /// project against the session and fails before any remote call when
    /// none is set.
    pub(crate) async fn describe(
        &self,
        kind: ObjectKind,
        name: &QualifiedName,
        partition: Option<&PartitionSpec>,
        extended: bool,
    ) -> anyhow::Result<()> {
        let mut target = match kind {
            ObjectKind::Project => ObjectRef::new(kind, name.name.clone(), name.name.clone()),
            _ => {
                let project = name
                    .project_in(&self.session)
                    .map_err(ConsoleError::from)?
                    .to_string();
                let mut target = ObjectRef::new(kind, project, name.name.clone());
                target.schema = name.schema_in(&self.session);
                target
            }
        };
        target.partition = partition.map(ToString::to_string);
        target.extended = extended;

        let description = self.meta.describe(&target).await?;
        self.emit(&render_description(&description, self.format())?);
        Ok(())
    }
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
