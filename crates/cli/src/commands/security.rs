// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Security statements (`grant`, `revoke`, policies, users and roles).

use crate::context::{Backends, Console};
use oc_adapters::MetaApi;

impl<B: Backends> Console<B> {
    /// Sent verbatim to the project's security endpoint; the reply is printed as is.
    pub(crate) async fn security(&self, statement: &str) -> anyhow::Result<()> {
        let project = self.project()?;
        tracing::debug!(project = %project, statement, "security statement");
        let output = self.meta.run_security(&project, statement).await?;
        self.emit(&output);
        Ok(())
    }
}

#[cfg(test)]
#[path = "security_tests.rs"]
mod tests;
