// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake job backend for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::JobApi;
use crate::error::RemoteError;
use async_trait::async_trait;
use oc_core::{JobConfig, JobFilter, JobId, JobSnapshot, JobStatus, JobSummary};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Recorded job API call
#[derive(Debug, Clone, PartialEq)]
pub enum JobCall {
    Submit(JobConfig),
    Get(JobId),
    Stop(JobId),
    List(JobFilter),
}

struct FakeJobState {
    calls: Vec<JobCall>,
    submit_results: VecDeque<Result<JobId, RemoteError>>,
    list_errors: VecDeque<RemoteError>,
    get_errors: VecDeque<RemoteError>,
    stop_errors: VecDeque<RemoteError>,
    /// Snapshot sequence per job; the last entry repeats
    scripts: HashMap<JobId, VecDeque<JobSnapshot>>,
    listings: Vec<JobSummary>,
    owner: String,
    now_ms: u64,
    next_id: u64,
}

/// In-memory job backend with scripted responses.
///
/// Unscripted submissions get ids `job-1`, `job-2`, ... and finish
/// successfully on the first poll.
#[derive(Clone)]
pub struct FakeJobApi {
    inner: Arc<Mutex<FakeJobState>>,
}

impl Default for FakeJobApi {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeJobState {
                calls: Vec::new(),
                submit_results: VecDeque::new(),
                list_errors: VecDeque::new(),
                get_errors: VecDeque::new(),
                stop_errors: VecDeque::new(),
                scripts: HashMap::new(),
                listings: Vec::new(),
                owner: "ALIYUN$tester".to_string(),
                now_ms: 0,
                next_id: 0,
            })),
        }
    }
}

impl FakeJobApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<JobCall> {
        self.inner.lock().calls.clone()
    }

    /// Configurations passed to `submit`, in order
    pub fn submissions(&self) -> Vec<JobConfig> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                JobCall::Submit(config) => Some(config.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count_gets(&self, id: &str) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c, JobCall::Get(j) if j == id))
            .count()
    }

    pub fn owner(&self) -> String {
        self.inner.lock().owner.clone()
    }

    /// Start time recorded for listings created by successful submissions
    pub fn set_now_ms(&self, now_ms: u64) {
        self.inner.lock().now_ms = now_ms;
    }

    /// Queue the outcome of the next `submit`
    pub fn push_submit_result(&self, result: Result<JobId, RemoteError>) {
        self.inner.lock().submit_results.push_back(result);
    }

    /// Fail the next `list` call
    pub fn fail_next_list(&self, err: RemoteError) {
        self.inner.lock().list_errors.push_back(err);
    }

    /// Fail the next `get` call, whichever job it asks for
    pub fn fail_next_get(&self, err: RemoteError) {
        self.inner.lock().get_errors.push_back(err);
    }

    /// Fail the next `stop` call
    pub fn fail_next_stop(&self, err: RemoteError) {
        self.inner.lock().stop_errors.push_back(err);
    }

    /// Snapshots returned by successive `get` calls for one job
    pub fn script(&self, snapshots: Vec<JobSnapshot>) {
        let Some(first) = snapshots.first() else {
            return;
        };
        let id = first.id.clone();
        self.inner.lock().scripts.insert(id, snapshots.into());
    }

    /// A job visible to `list` (e.g. one created by a submission whose
    /// response was lost)
    pub fn add_listing(&self, summary: JobSummary) {
        self.inner.lock().listings.push(summary);
    }
}

#[async_trait]
impl JobApi for FakeJobApi {
    async fn submit(&self, config: &JobConfig) -> Result<JobId, RemoteError> {
        let mut inner = self.inner.lock();
        inner.calls.push(JobCall::Submit(config.clone()));
        let result = match inner.submit_results.pop_front() {
            Some(result) => result,
            None => {
                inner.next_id += 1;
                Ok(JobId::new(format!("job-{}", inner.next_id)))
            }
        };
        if let Ok(id) = &result {
            if !inner.scripts.contains_key(id) {
                let done = JobSnapshot::new(id.clone(), JobStatus::Success);
                inner.scripts.insert(id.clone(), VecDeque::from([done]));
            }
            let mut summary = JobSummary::new(
                id.clone(),
                &inner.owner.clone(),
                JobStatus::Running,
                inner.now_ms,
            );
            summary.token = config.token.clone();
            inner.listings.push(summary);
        }
        result
    }

    async fn get(&self, id: &JobId) -> Result<JobSnapshot, RemoteError> {
        let mut inner = self.inner.lock();
        inner.calls.push(JobCall::Get(id.clone()));
        if let Some(err) = inner.get_errors.pop_front() {
            return Err(err);
        }
        let script = inner
            .scripts
            .get_mut(id)
            .ok_or_else(|| RemoteError::server("NoSuchObject", format!("job {id} not found")))?;
        let snapshot = if script.len() > 1 {
            script.pop_front()
        } else {
            script.front().cloned()
        };
        snapshot.ok_or_else(|| RemoteError::server("NoSuchObject", format!("job {id} not found")))
    }

    async fn stop(&self, id: &JobId) -> Result<(), RemoteError> {
        let mut inner = self.inner.lock();
        inner.calls.push(JobCall::Stop(id.clone()));
        match inner.stop_errors.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobSummary>, RemoteError> {
        let mut inner = self.inner.lock();
        inner.calls.push(JobCall::List(filter.clone()));
        if let Some(err) = inner.list_errors.pop_front() {
            return Err(err);
        }
        let owner = inner.owner.clone();
        let mut jobs: Vec<JobSummary> = inner
            .listings
            .iter()
            .filter(|j| filter.matches(j, Some(&owner)))
            .cloned()
            .collect();
        jobs.reverse();
        if let Some(limit) = filter.limit {
            jobs.truncate(limit);
        }
        Ok(jobs)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
