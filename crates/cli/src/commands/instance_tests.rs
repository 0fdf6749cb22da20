// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::context::test_support::Harness;
use crate::error::ConsoleError;
use oc_adapters::{JobCall, RemoteError};
use oc_core::{JobId, JobSnapshot, JobStatus, JobSummary, TaskStatus};

fn queued(id: &str, position: u32) -> JobSummary {
    let mut job = JobSummary::new(id, "ALIYUN$tester", JobStatus::Submitted, 1_000);
    job.queue_position = Some(position);
    job
}

#[tokio::test]
async fn show_instances_filters_own_jobs_in_project() {
    let h = Harness::in_project();
    h.jobs
        .add_listing(JobSummary::new("j1", "ALIYUN$tester", JobStatus::Success, 1_000));
    h.jobs
        .add_listing(JobSummary::new("j2", "ALIYUN$other", JobStatus::Success, 2_000));

    h.console
        .show_instances(Some(500), None, Some(10))
        .await
        .unwrap();

    let calls = h.jobs.calls();
    let JobCall::List(filter) = &calls[0] else {
        panic!("expected list, got {calls:?}");
    };
    assert_eq!(filter.project.as_deref(), Some("p1"));
    assert!(filter.owner_only);
    assert_eq!(filter.since_ms, Some(500));
    assert_eq!(filter.limit, Some(10));

    let text = h.sink.text();
    assert!(text.contains("j1"));
    assert!(!text.contains("j2"));
}

#[tokio::test]
async fn show_instances_defaults_limit() {
    let h = Harness::in_project();
    h.console.show_instances(None, None, None).await.unwrap();
    let calls = h.jobs.calls();
    assert!(matches!(&calls[0], JobCall::List(f) if f.limit == Some(50)));
}

#[tokio::test]
async fn show_instances_requires_project() {
    let h = Harness::new();
    let err = h.console.show_instances(None, None, None).await.unwrap_err();
    assert!(err.is::<ConsoleError>());
    assert!(h.jobs.calls().is_empty());
}

#[tokio::test]
async fn top_instance_once() {
    let h = Harness::in_project();
    h.jobs.add_listing(queued("j1", 2));

    h.console.top_instance(false, None).await.unwrap();

    let text = h.sink.text();
    assert!(text.contains("QUEUE"));
    assert!(text.contains("j1"));
    assert!(h.sink.frames().is_empty());
}

#[tokio::test]
async fn top_instance_empty_queue() {
    let h = Harness::in_project();
    h.console.top_instance(false, None).await.unwrap();
    assert_eq!(h.sink.progress_lines(), vec!["No queued or running instances"]);
}

#[tokio::test(start_paused = true)]
async fn top_instance_refresh_ends_on_interrupt() {
    let h = Harness::in_project();
    h.jobs.add_listing(queued("j1", 1));
    let interrupt = h.console.interrupt().clone();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_secs(7)).await;
        interrupt.trigger();
    });

    h.console.top_instance(true, None).await.unwrap();

    assert!(h.sink.frames().len() >= 2);
    assert!(!h.console.interrupt().is_set());
}

#[tokio::test(start_paused = true)]
async fn top_instance_refresh_list_error() {
    let h = Harness::in_project();
    h.jobs
        .fail_next_list(RemoteError::server("InternalServerError", "boom"));
    let err = h.console.top_instance(true, None).await.unwrap_err();
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn status_prints_status_and_tasks() {
    let h = Harness::in_project();
    h.jobs.script(vec![JobSnapshot::new("j1", JobStatus::Running).with_task(
        "SQL",
        TaskStatus::Running,
        None,
    )]);

    h.console.status(&JobId::new("j1")).await.unwrap();

    assert_eq!(h.sink.results(), vec!["running"]);
    assert_eq!(h.sink.progress_lines(), vec!["SQL: running"]);
}

#[tokio::test]
async fn status_of_unknown_job() {
    let h = Harness::in_project();
    let err = h.console.status(&JobId::new("nope")).await.unwrap_err();
    assert!(err.to_string().contains("NoSuchObject"));
}

#[tokio::test(start_paused = true)]
async fn wait_prints_result_and_ok() {
    let h = Harness::in_project();
    h.jobs.script(vec![
        JobSnapshot::new("j1", JobStatus::Running),
        JobSnapshot::new("j1", JobStatus::Success).with_task("SQL", TaskStatus::Success, Some("42")),
    ]);

    h.console.wait(&JobId::new("j1")).await.unwrap();

    assert_eq!(h.sink.results(), vec!["42"]);
    assert_eq!(h.sink.progress_lines().last().map(String::as_str), Some("OK"));
}

#[tokio::test]
async fn kill_async() {
    let h = Harness::in_project();
    h.console.kill(&JobId::new("j1"), false).await.unwrap();
    assert_eq!(h.jobs.calls(), vec![JobCall::Stop(JobId::new("j1"))]);
    assert_eq!(h.sink.progress_lines(), vec!["Stop requested for instance j1"]);
}

#[tokio::test(start_paused = true)]
async fn kill_sync_waits_for_terminal() {
    let h = Harness::in_project();
    h.jobs.script(vec![
        JobSnapshot::new("j1", JobStatus::Running),
        JobSnapshot::new("j1", JobStatus::Failed),
    ]);

    h.console.kill(&JobId::new("j1"), true).await.unwrap();

    assert_eq!(h.jobs.count_gets("j1"), 2);
    assert_eq!(h.sink.count_containing("Instance j1 is failed"), 1);
}
