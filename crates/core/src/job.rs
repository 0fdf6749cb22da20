// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote job identifiers, snapshots and submission configuration.
//!
//! Jobs are owned by the remote service. Locally we only hold an id plus the
//! most recent snapshot returned by the job API.

use crate::id::IdempotencyToken;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

crate::define_id! {
    /// Server-assigned identifier of a remote job instance.
    pub struct JobId;
}

/// Property holding the serialized settings map of a submission.
pub const SETTINGS_PROPERTY: &str = "settings";

/// Property holding the serialized alias map of a submission.
pub const ALIASES_PROPERTY: &str = "aliases";

/// Lifecycle status of a remote job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Accepted and queued, not yet running
    Submitted,
    Running,
    Success,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Success | JobStatus::Failed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Submitted => write!(f, "submitted"),
            JobStatus::Running => write!(f, "running"),
            JobStatus::Success => write!(f, "success"),
            JobStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Status of a single named task inside a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Waiting,
    Running,
    Success,
    Failed,
    Suspended,
    Cancelled,
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Success | TaskStatus::Failed | TaskStatus::Cancelled
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Waiting => write!(f, "waiting"),
            TaskStatus::Running => write!(f, "running"),
            TaskStatus::Success => write!(f, "success"),
            TaskStatus::Failed => write!(f, "failed"),
            TaskStatus::Suspended => write!(f, "suspended"),
            TaskStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub name: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

/// How a child node of a job should be tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A remote job with its own id, tasks and possibly children
    Remote,
    /// A grouping node; its children are the real work
    SubWorkflow,
    /// Runs on the client side, never tracked remotely
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildNode {
    pub id: JobId,
    pub name: String,
    pub kind: NodeKind,
}

/// Point-in-time view of a remote job as returned by the job API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub id: JobId,
    pub status: JobStatus,
    #[serde(default)]
    pub tasks: Vec<TaskSnapshot>,
    #[serde(default)]
    pub children: Vec<ChildNode>,
}

impl JobSnapshot {
    pub fn new(id: impl Into<JobId>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            status,
            tasks: Vec::new(),
            children: Vec::new(),
        }
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn with_task(mut self, name: &str, status: TaskStatus, result: Option<&str>) -> Self {
        self.tasks.push(TaskSnapshot {
            name: name.to_string(),
            status,
            result: result.map(String::from),
        });
        self
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn with_child(mut self, id: impl Into<JobId>, kind: NodeKind) -> Self {
        let id = id.into();
        self.children.push(ChildNode {
            name: id.to_string(),
            id,
            kind,
        });
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Result text of the job's own tasks, in task order.
    pub fn result_text(&self) -> String {
        self.tasks
            .iter()
            .filter_map(|t| t.result.as_deref())
            .filter(|r| !r.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One-line summary of task progress, e.g. `"SQL: running"`.
    pub fn progress_line(&self) -> String {
        if self.tasks.is_empty() {
            return format!("{}: {}", self.id, self.status);
        }
        self.tasks
            .iter()
            .map(|t| format!("{}: {}", t.name, t.status))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Family of remote work, each with its own configuration defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    Sql,
    /// Machine-learning algorithm run
    Xlib,
    Workflow,
    Security,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::Sql => write!(f, "sql"),
            JobKind::Xlib => write!(f, "xlib"),
            JobKind::Workflow => write!(f, "workflow"),
            JobKind::Security => write!(f, "security"),
        }
    }
}

/// Everything needed to submit one remote job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    pub kind: JobKind,
    pub statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<IdempotencyToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default)]
    pub properties: IndexMap<String, String>,
}

impl JobConfig {
    pub fn new(kind: JobKind, statement: impl Into<String>) -> Self {
        Self {
            kind,
            statement: statement.into(),
            project: None,
            token: None,
            priority: None,
            properties: IndexMap::new(),
        }
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Decode the `settings` property, if present and well-formed.
    pub fn settings(&self) -> Option<IndexMap<String, String>> {
        serde_json::from_str(self.property(SETTINGS_PROPERTY)?).ok()
    }
}

/// Filter for listing jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub project: Option<String>,
    /// Inclusive lower bound on start time
    pub since_ms: Option<u64>,
    /// Exclusive upper bound on start time
    pub until_ms: Option<u64>,
    /// Only jobs submitted by the current identity
    pub owner_only: bool,
    /// Empty means any status
    pub statuses: Vec<JobStatus>,
    pub limit: Option<usize>,
}

impl JobFilter {
    pub fn matches(&self, job: &JobSummary, owner: Option<&str>) -> bool {
        if let Some(since) = self.since_ms {
            if job.start_time_ms < since {
                return false;
            }
        }
        if let Some(until) = self.until_ms {
            if job.start_time_ms >= until {
                return false;
            }
        }
        if self.owner_only {
            if let Some(owner) = owner {
                if job.owner != owner {
                    return false;
                }
            }
        }
        self.statuses.is_empty() || self.statuses.contains(&job.status)
    }
}

/// Listing entry for a remote job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    pub owner: String,
    pub status: JobStatus,
    pub start_time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<IdempotencyToken>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// CPU usage in percent of one core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_percent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

impl JobSummary {
    pub fn new(id: impl Into<JobId>, owner: &str, status: JobStatus, start_time_ms: u64) -> Self {
        Self {
            id: id.into(),
            owner: owner.to_string(),
            status,
            start_time_ms,
            token: None,
            queue_position: None,
            priority: None,
            cpu_percent: None,
            memory_mb: None,
            progress: None,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
