// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use oc_core::{IdempotencyToken, JobKind};

#[tokio::test]
async fn unscripted_submit_succeeds_on_first_poll() {
    let api = FakeJobApi::new();
    let id = api
        .submit(&JobConfig::new(JobKind::Sql, "select 1"))
        .await
        .unwrap();
    assert_eq!(id, "job-1");
    assert_eq!(api.get(&id).await.unwrap().status, JobStatus::Success);
}

#[tokio::test]
async fn scripted_snapshots_advance_and_last_repeats() {
    let api = FakeJobApi::new();
    api.script(vec![
        JobSnapshot::new("j", JobStatus::Running),
        JobSnapshot::new("j", JobStatus::Success),
    ]);
    let id = JobId::new("j");
    assert_eq!(api.get(&id).await.unwrap().status, JobStatus::Running);
    assert_eq!(api.get(&id).await.unwrap().status, JobStatus::Success);
    assert_eq!(api.get(&id).await.unwrap().status, JobStatus::Success);
    assert_eq!(api.count_gets("j"), 3);
}

#[tokio::test]
async fn submit_records_token_in_listing() {
    let api = FakeJobApi::new();
    let mut config = JobConfig::new(JobKind::Sql, "select 1");
    config.token = Some(IdempotencyToken::new("t-1"));
    api.submit(&config).await.unwrap();

    let jobs = api.list(&JobFilter::default()).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].token.as_ref().map(|t| t.as_str()), Some("t-1"));
}

#[tokio::test]
async fn failed_submit_creates_nothing() {
    let api = FakeJobApi::new();
    api.push_submit_result(Err(RemoteError::Io("reset".into())));
    let result = api.submit(&JobConfig::new(JobKind::Sql, "select 1")).await;
    assert!(result.is_err());
    assert!(api.list(&JobFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_applies_filter_and_scripted_errors() {
    let api = FakeJobApi::new();
    api.add_listing(JobSummary::new("a", "someone-else", JobStatus::Running, 10));
    api.add_listing(JobSummary::new("b", &api.owner(), JobStatus::Running, 20));
    let filter = JobFilter {
        owner_only: true,
        ..JobFilter::default()
    };
    let jobs = api.list(&filter).await.unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id, "b");

    api.fail_next_list(RemoteError::Io("reset".into()));
    assert!(api.list(&filter).await.is_err());
    assert!(api.list(&filter).await.is_ok());
}
