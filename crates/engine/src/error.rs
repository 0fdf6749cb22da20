// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for job submission and tracking

use oc_adapters::RemoteError;
use oc_core::JobId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The job reached a failed terminal state
    #[error("job {job_id} failed: {message}")]
    JobFailed { job_id: JobId, message: String },

    /// Ctrl+C while waiting; the remote job keeps running
    #[error("interrupted")]
    Interrupted { job_id: Option<JobId> },

    /// Final outcome of a recovered submission; the service may hold a job
    /// for it
    #[error("{source}")]
    SubmitUnresolved { source: RemoteError },

    /// The job was created; following it failed
    #[error("lost track of job {job_id}: {source}")]
    Tracking { job_id: JobId, source: RemoteError },
}

impl EngineError {
    /// The remote failure behind this error, if any.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            EngineError::Remote(source)
            | EngineError::SubmitUnresolved { source }
            | EngineError::Tracking { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        self.remote().and_then(RemoteError::request_id)
    }

    /// Whether running the operation again could create a second job.
    pub fn may_duplicate_job(&self) -> bool {
        matches!(
            self,
            EngineError::SubmitUnresolved { .. } | EngineError::Tracking { .. }
        )
    }
}
