// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entry point used by job-submitting commands.

use crate::diagnose::diagnose;
use crate::env;
use crate::error::EngineError;
use crate::interrupt::Interrupt;
use crate::merge::{build_config, Overrides};
use crate::submit::Submitter;
use crate::tracker::{announce, TrackOptions, Tracker};
use oc_adapters::{JobApi, LogViewLinker, OutputSink};
use oc_core::{
    Clock, IdGen, JobConfig, JobId, JobKind, JobStatus, SessionContext, SystemClock, UuidIdGen,
};
use std::time::Duration;

/// Timing knobs for submission and polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    pub poll_interval: Duration,
    pub retry_backoff: Duration,
    pub retry_window: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            retry_backoff: Duration::from_secs(3),
            retry_window: Duration::from_secs(600),
        }
    }
}

impl RunnerConfig {
    /// Apply `OC_WAIT_POLL_MS`, `OC_RETRY_BACKOFF_MS` and `OC_RETRY_WINDOW_SECS`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(d) = env::wait_poll() {
            self.poll_interval = d;
        }
        if let Some(d) = env::retry_backoff() {
            self.retry_backoff = d;
        }
        if let Some(d) = env::retry_window() {
            self.retry_window = d;
        }
        self
    }
}

/// Job-type defaults plus statement-local overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub defaults: JobConfig,
    pub overrides: Overrides,
}

impl JobRequest {
    pub fn new(defaults: JobConfig) -> Self {
        Self {
            defaults,
            overrides: Overrides::default(),
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }
}

impl From<JobConfig> for JobRequest {
    fn from(defaults: JobConfig) -> Self {
        Self::new(defaults)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub job_id: JobId,
    /// Result text of a finished job; `None` when submitted asynchronously
    pub result: Option<String>,
}

/// Submits jobs and, unless the session is in async mode, waits for them.
#[derive(Clone)]
pub struct JobRunner<J, S, L, C = SystemClock, G = UuidIdGen> {
    api: J,
    sink: S,
    linker: L,
    submitter: Submitter<J, C, G>,
    tracker: Tracker<J, S, L>,
}

impl<J, S, L, C, G> JobRunner<J, S, L, C, G>
where
    J: JobApi,
    S: OutputSink,
    L: LogViewLinker,
    C: Clock,
    G: IdGen,
{
    pub fn new(
        api: J,
        sink: S,
        linker: L,
        clock: C,
        ids: G,
        interrupt: Interrupt,
        config: RunnerConfig,
    ) -> Self {
        let submitter = Submitter::new(api.clone(), clock, ids, interrupt.clone())
            .with_backoff(config.retry_backoff)
            .with_window(config.retry_window);
        let tracker = Tracker::new(
            api.clone(),
            sink.clone(),
            linker.clone(),
            config.poll_interval,
            interrupt,
        );
        Self {
            api,
            sink,
            linker,
            submitter,
            tracker,
        }
    }

    /// The configuration a submission would carry, without submitting.
    pub fn preview(&self, request: impl Into<JobRequest>, session: &SessionContext) -> JobConfig {
        let request = request.into();
        build_config(request.defaults, session, &request.overrides)
    }

    /// Submit a job and, in sync mode, track it to completion.
    ///
    /// Success prints the job's result and `OK`. A failed job is diagnosed
    /// and reported as [`EngineError::JobFailed`].
    pub async fn submit_and_maybe_wait(
        &self,
        request: impl Into<JobRequest>,
        session: &SessionContext,
    ) -> Result<SubmitOutcome, EngineError> {
        let request = request.into();
        let options = TrackOptions {
            trailing_tick: request.defaults.kind == JobKind::Xlib,
        };
        let config = build_config(request.defaults, session, &request.overrides);
        let job_id = self.submitter.submit(config).await?;

        if session.flags.async_mode {
            announce(&self.sink, &self.linker, &job_id);
            self.sink.progress(&format!(
                "Job submitted. Use 'status {job_id}' to check progress or 'kill {job_id}' to stop it."
            ));
            return Ok(SubmitOutcome {
                job_id,
                result: None,
            });
        }
        match self.wait_for(&job_id, options).await {
            Err(EngineError::Remote(source)) => Err(EngineError::Tracking { job_id, source }),
            other => other,
        }
    }

    /// Track an existing job and report its outcome.
    pub async fn wait_for(
        &self,
        job_id: &JobId,
        options: TrackOptions,
    ) -> Result<SubmitOutcome, EngineError> {
        let snapshot = self.tracker.wait(job_id, options).await?;
        if snapshot.status != JobStatus::Success {
            let message = diagnose(&self.api, &snapshot).await?;
            return Err(EngineError::JobFailed {
                job_id: job_id.clone(),
                message,
            });
        }

        let text = snapshot.result_text();
        if !text.is_empty() {
            self.sink.result(&text);
        }
        self.sink.progress("OK");
        Ok(SubmitOutcome {
            job_id: job_id.clone(),
            result: Some(text),
        })
    }

    /// Request termination; with `sync`, wait until the job is terminal.
    pub async fn stop(&self, job_id: &JobId, sync: bool) -> Result<Option<JobStatus>, EngineError> {
        self.api.stop(job_id).await?;
        if !sync {
            return Ok(None);
        }
        let snapshot = self.tracker.wait(job_id, TrackOptions::default()).await?;
        Ok(Some(snapshot.status))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
