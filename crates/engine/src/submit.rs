// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job submission with lost-response recovery.
//!
//! A transient failure on submit does not mean the job was not created. Before
//! trying again, the submitter looks for a recent job of ours carrying the
//! failed attempt's idempotency token and adopts it.

use crate::error::EngineError;
use crate::interrupt::Interrupt;
use crate::poll::sleep_unless_interrupted;
use oc_adapters::{JobApi, RemoteError};
use oc_core::{Clock, IdGen, IdempotencyToken, JobConfig, JobFilter, JobId};
use std::time::{Duration, Instant};
use tracing::Instrument;

/// Attempt budget for one submission.
///
/// The counter only decrements; once it reaches zero no further attempt is
/// made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryState {
    remaining: u32,
    token: Option<IdempotencyToken>,
}

impl RetryState {
    pub fn new(attempts: u32) -> Self {
        Self {
            remaining: attempts,
            token: None,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Token of the most recent attempt.
    pub fn token(&self) -> Option<&IdempotencyToken> {
        self.token.as_ref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Record the start of an attempt carrying `token`.
    pub fn begin(&mut self, token: IdempotencyToken) {
        self.remaining = self.remaining.saturating_sub(1);
        self.token = Some(token);
    }
}

/// Submits jobs, recovering from responses lost to transient errors.
#[derive(Clone)]
pub struct Submitter<J, C, G> {
    api: J,
    clock: C,
    ids: G,
    backoff: Duration,
    window: Duration,
    interrupt: Interrupt,
}

impl<J: JobApi, C: Clock, G: IdGen> Submitter<J, C, G> {
    pub fn new(api: J, clock: C, ids: G, interrupt: Interrupt) -> Self {
        Self {
            api,
            clock,
            ids,
            backoff: Duration::from_secs(3),
            window: Duration::from_secs(600),
            interrupt,
        }
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Submit `config`, returning the id of the created (or adopted) job.
    pub async fn submit(&self, config: JobConfig) -> Result<JobId, EngineError> {
        let span = tracing::info_span!("submit", kind = %config.kind);
        self.submit_inner(config).instrument(span).await
    }

    async fn submit_inner(&self, mut config: JobConfig) -> Result<JobId, EngineError> {
        // first attempt plus at most one resubmission
        let mut state = RetryState::new(2);
        loop {
            let token = self.ids.next();
            state.begin(token.clone());
            config.token = Some(token.clone());

            let err = match self.api.submit(&config).await {
                Ok(id) => return Ok(id),
                Err(err) => err,
            };
            if state.is_exhausted() {
                // the resubmission's outcome is final
                return Err(EngineError::SubmitUnresolved { source: err });
            }
            if !err.is_transient() {
                return Err(err.into());
            }

            tracing::warn!(error = %err, token = %token, "submit failed, checking whether the job was created");
            if !sleep_unless_interrupted(self.backoff, &self.interrupt).await {
                return Err(EngineError::Interrupted { job_id: None });
            }

            match self.find_by_token(&config, &token).await {
                Ok(Some(id)) => {
                    tracing::info!(job_id = %id, token = %token, "adopting job created by failed submit");
                    return Ok(id);
                }
                Ok(None) => {
                    tracing::info!(token = %token, "no job found for token, resubmitting");
                }
                Err(search_err) => {
                    tracing::warn!(error = %search_err, "job search failed");
                    return Err(EngineError::SubmitUnresolved { source: err });
                }
            }
        }
    }

    async fn find_by_token(
        &self,
        config: &JobConfig,
        token: &IdempotencyToken,
    ) -> Result<Option<JobId>, RemoteError> {
        let start = Instant::now();
        let now = self.clock.epoch_ms();
        let filter = JobFilter {
            project: config.project.clone(),
            since_ms: Some(now.saturating_sub(self.window.as_millis() as u64)),
            owner_only: true,
            ..JobFilter::default()
        };
        let jobs = self.api.list(&filter).await?;
        tracing::debug!(
            candidates = jobs.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "searched recent jobs"
        );
        Ok(jobs
            .into_iter()
            .find(|j| j.token.as_ref() == Some(token))
            .map(|j| j.id))
    }
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
