// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure diagnosis for finished jobs.

use oc_adapters::{JobApi, RemoteError};
use oc_core::{JobSnapshot, JobStatus, NodeKind, TaskStatus};
use std::collections::HashSet;

/// Explain why `root` failed.
///
/// Children are searched depth-first (sub-workflows expanded, local nodes
/// skipped) for the first explicitly failed one; its task result is the
/// diagnosis. Without a failed child, the first non-successful task of the
/// root is reported.
pub async fn diagnose<J: JobApi>(api: &J, root: &JobSnapshot) -> Result<String, RemoteError> {
    let mut visited = HashSet::new();
    let mut stack: Vec<_> = root.children.iter().rev().cloned().collect();
    while let Some(node) = stack.pop() {
        if node.kind == NodeKind::Local || !visited.insert(node.id.clone()) {
            continue;
        }
        let child = api.get(&node.id).await?;
        if node.kind == NodeKind::Remote && child.status == JobStatus::Failed {
            return Ok(task_diagnosis(&child));
        }
        stack.extend(child.children.iter().rev().cloned());
    }
    Ok(task_diagnosis(root))
}

/// First non-successful task's result, or a status line when it has none.
fn task_diagnosis(job: &JobSnapshot) -> String {
    let Some(task) = job.tasks.iter().find(|t| t.status != TaskStatus::Success) else {
        return format!("job {} {}", job.id, job.status);
    };
    match task.result.as_deref().filter(|r| !r.trim().is_empty()) {
        Some(result) => result.to_string(),
        None => format!("task {} {}", task.name, task.status),
    }
}

#[cfg(test)]
#[path = "diagnose_tests.rs"]
mod tests;
