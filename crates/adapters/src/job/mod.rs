// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote job backend

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeJobApi, JobCall};

use crate::error::RemoteError;
use async_trait::async_trait;
use oc_core::{JobConfig, JobFilter, JobId, JobSnapshot, JobSummary};

/// Submits, inspects and stops remote jobs.
#[async_trait]
pub trait JobApi: Clone + Send + Sync + 'static {
    /// Create a job. The configuration's token is stored with the job.
    async fn submit(&self, config: &JobConfig) -> Result<JobId, RemoteError>;

    /// Current status, tasks and child nodes of a job.
    async fn get(&self, id: &JobId) -> Result<JobSnapshot, RemoteError>;

    /// Request termination. Does not wait for the job to stop.
    async fn stop(&self, id: &JobId) -> Result<(), RemoteError>;

    /// Jobs matching `filter`, most recent first.
    async fn list(&self, filter: &JobFilter) -> Result<Vec<JobSummary>, RemoteError>;
}
