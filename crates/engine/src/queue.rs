// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queue introspection (`top instance`).

use crate::interrupt::Interrupt;
use crate::poll::{Poller, Tick};
use oc_adapters::{JobApi, RemoteError};
use oc_core::{JobFilter, JobStatus, JobSummary};
use std::time::Duration;

/// Why a queue watch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEnd {
    Drained,
    Interrupted,
}

/// Queued and running jobs of a project.
pub fn queue_filter(project: Option<String>) -> JobFilter {
    JobFilter {
        project,
        statuses: vec![JobStatus::Submitted, JobStatus::Running],
        ..JobFilter::default()
    }
}

/// Render the queue every `interval` until it is empty or Ctrl+C.
///
/// The empty queue is rendered once before returning.
pub async fn watch_queue<J, F>(
    api: &J,
    filter: &JobFilter,
    interval: Duration,
    interrupt: Interrupt,
    mut render: F,
) -> Result<WatchEnd, RemoteError>
where
    J: JobApi,
    F: FnMut(&[JobSummary]),
{
    let mut poller = Poller::new(interval, None, interrupt);
    let mut frames = 0u64;
    loop {
        let jobs = api.list(filter).await?;
        render(&jobs);
        frames += 1;
        if jobs.is_empty() {
            tracing::debug!(frames, "queue drained");
            return Ok(WatchEnd::Drained);
        }
        if poller.tick().await == Tick::Interrupted {
            tracing::debug!(frames, "queue watch interrupted");
            return Ok(WatchEnd::Interrupted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oc_adapters::FakeJobApi;
    use oc_core::JobConfig;
    use oc_core::JobKind;

    #[test]
    fn filter_selects_active_jobs() {
        let filter = queue_filter(Some("p1".into()));
        assert_eq!(filter.statuses, vec![JobStatus::Submitted, JobStatus::Running]);
        assert_eq!(filter.project.as_deref(), Some("p1"));
        assert!(!filter.owner_only);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_queue_renders_once_and_stops() {
        let api = FakeJobApi::new();
        let mut frames = Vec::new();

        let end = watch_queue(
            &api,
            &queue_filter(None),
            Duration::from_secs(3),
            Interrupt::new(),
            |jobs| frames.push(jobs.len()),
        )
        .await
        .unwrap();

        assert_eq!(end, WatchEnd::Drained);
        assert_eq!(frames, vec![0]);
    }

    #[tokio::test(start_paused = true)]
    async fn busy_queue_refreshes_until_interrupted() {
        let api = FakeJobApi::new();
        api.submit(&JobConfig::new(JobKind::Sql, "select 1;"))
            .await
            .unwrap();
        let interrupt = Interrupt::new();
        let trigger = interrupt.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(7500)).await;
            trigger.trigger();
        });
        let mut frames = 0;

        let end = watch_queue(
            &api,
            &queue_filter(None),
            Duration::from_secs(3),
            interrupt,
            |_| frames += 1,
        )
        .await
        .unwrap();

        assert_eq!(end, WatchEnd::Interrupted);
        assert_eq!(frames, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn list_failure_propagates() {
        let api = FakeJobApi::new();
        api.fail_next_list(RemoteError::Io("down".into()));

        let result = watch_queue(
            &api,
            &queue_filter(None),
            Duration::from_secs(3),
            Interrupt::new(),
            |_| {},
        )
        .await;

        assert_eq!(result, Err(RemoteError::Io("down".into())));
    }
}
