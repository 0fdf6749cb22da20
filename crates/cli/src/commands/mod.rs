// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations, one module per statement family group.
//!
//! Every module adds methods to [`Console`]; `exec::run` dispatches to them.

mod data;
mod describe;
mod instance;
mod jobs;
mod listing;
mod resource;
mod security;
mod session;
mod sql;

use crate::context::{Backends, Console};
use crate::error::{from_engine, ConsoleError};
use crate::output::to_json;
use oc_adapters::OutputSink;
use oc_engine::JobRequest;

impl<B: Backends> Console<B> {
    /// Submit a job, or print the configuration it would carry in dry-run mode.
    pub(crate) async fn submit_job(&self, request: impl Into<JobRequest>) -> anyhow::Result<()> {
        let request = request.into();
        if request.defaults.project.is_none() {
            self.session
                .require_project()
                .map_err(ConsoleError::from)?;
        }
        if self.session.flags.dry_run {
            let config = self.runner.preview(request, &self.session);
            self.sink.result(&to_json(&config)?);
            return Ok(());
        }
        self.runner
            .submit_and_maybe_wait(request, &self.session)
            .await
            .map_err(from_engine)?;
        Ok(())
    }

    /// Print a rendered result unless it is empty.
    pub(crate) fn emit(&self, text: &str) {
        let text = text.trim_end_matches('\n');
        if !text.is_empty() {
            self.sink.result(text);
        }
    }

    pub(crate) fn project(&self) -> Result<String, ConsoleError> {
        Ok(self.session.require_project()?.to_string())
    }
}
