// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generic SQL, the fallback for statements no other family claims.

use crate::context::{Backends, Console};
use oc_core::{JobConfig, JobKind};

impl<B: Backends> Console<B> {
    pub(crate) async fn sql(&self, statement: &str) -> anyhow::Result<()> {
        let config = JobConfig::new(JobKind::Sql, format!("{statement};"));
        self.submit_job(config).await
    }
}

#[cfg(test)]
#[path = "sql_tests.rs"]
mod tests;
