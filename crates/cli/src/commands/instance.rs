// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job instance statements: listing, queue view, status, wait and kill.

use crate::context::{Backends, Console};
use crate::error::from_engine;
use crate::output::{render_instances, render_queue, to_json, OutputFormat};
use oc_adapters::{JobApi, OutputSink};
use oc_core::{Clock, JobFilter, JobId, SystemClock};
use oc_engine::{queue_filter, watch_queue, TrackOptions, WatchEnd};

/// Rows shown by `show instances` without an explicit count.
const DEFAULT_INSTANCE_LIMIT: usize = 50;

impl<B: Backends> Console<B> {
    /// The caller's own jobs in the active project, newest first.
    pub(crate) async fn show_instances(
        &self,
        from_ms: Option<u64>,
        until_ms: Option<u64>,
        limit: Option<usize>,
    ) -> anyhow::Result<()> {
        let filter = JobFilter {
            project: Some(self.project()?),
            since_ms: from_ms,
            until_ms,
            owner_only: true,
            statuses: Vec::new(),
            limit: Some(limit.unwrap_or(DEFAULT_INSTANCE_LIMIT)),
        };
        let jobs = self.jobs.list(&filter).await?;
        let now_ms = SystemClock.epoch_ms();
        self.emit(&render_instances(
            &jobs,
            now_ms,
            self.format(),
            self.options.colorize,
        )?);
        Ok(())
    }

    /// Queued and running jobs; with `refresh`, redraw until drained or Ctrl+C.
    pub(crate) async fn top_instance(
        &self,
        refresh: bool,
        limit: Option<usize>,
    ) -> anyhow::Result<()> {
        let mut filter = queue_filter(Some(self.project()?));
        filter.limit = limit;
        let format = self.format();
        let colorize = self.options.colorize;

        if !refresh {
            let jobs = self.jobs.list(&filter).await?;
            if jobs.is_empty() && format == OutputFormat::Text {
                self.sink.progress("No queued or running instances");
                return Ok(());
            }
            self.emit(&render_queue(&jobs, format, colorize)?);
            return Ok(());
        }

        let end = watch_queue(
            &self.jobs,
            &filter,
            self.options.top_interval,
            self.interrupt.clone(),
            |jobs| match render_queue(jobs, format, colorize) {
                Ok(frame) => self.sink.frame(&frame),
                Err(err) => tracing::warn!(error = %err, "failed to render queue"),
            },
        )
        .await?;
        if end == WatchEnd::Interrupted {
            // Ctrl+C is how a refreshing view is normally left
            self.interrupt.clear();
        }
        Ok(())
    }

    pub(crate) async fn status(&self, id: &JobId) -> anyhow::Result<()> {
        let snapshot = self.jobs.get(id).await?;
        match self.format() {
            OutputFormat::Json => self.emit(&to_json(&snapshot)?),
            OutputFormat::Text => {
                self.sink.result(&snapshot.status.to_string());
                if !snapshot.tasks.is_empty() {
                    self.sink.progress(&snapshot.progress_line());
                }
            }
        }
        Ok(())
    }

    pub(crate) async fn wait(&self, id: &JobId) -> anyhow::Result<()> {
        self.runner
            .wait_for(id, TrackOptions::default())
            .await
            .map_err(from_engine)?;
        Ok(())
    }

    pub(crate) async fn kill(&self, id: &JobId, sync: bool) -> anyhow::Result<()> {
        match self.runner.stop(id, sync).await.map_err(from_engine)? {
            Some(status) => self.sink.progress(&format!("Instance {id} is {status}")),
            None => self.sink.progress(&format!("Stop requested for instance {id}")),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "instance_tests.rs"]
mod tests;
