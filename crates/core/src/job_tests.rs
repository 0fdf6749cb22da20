// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    submitted = { JobStatus::Submitted, false },
    running   = { JobStatus::Running, false },
    success   = { JobStatus::Success, true },
    failed    = { JobStatus::Failed, true },
)]
fn job_status_terminal(status: JobStatus, terminal: bool) {
    assert_eq!(status.is_terminal(), terminal);
}

#[test]
fn job_status_serde_is_snake_case() {
    assert_eq!(
        serde_json::to_string(&JobStatus::Submitted).unwrap(),
        "\"submitted\""
    );
    let parsed: JobStatus = serde_json::from_str("\"failed\"").unwrap();
    assert_eq!(parsed, JobStatus::Failed);
}

#[test]
fn result_text_joins_non_empty_task_results() {
    let snapshot = JobSnapshot::new("j1", JobStatus::Success)
        .with_task("stage1", TaskStatus::Success, Some("a"))
        .with_task("stage2", TaskStatus::Success, Some(""))
        .with_task("stage3", TaskStatus::Success, None)
        .with_task("stage4", TaskStatus::Success, Some("b"));
    assert_eq!(snapshot.result_text(), "a\nb");
}

#[test]
fn progress_line_lists_tasks() {
    let snapshot = JobSnapshot::new("j1", JobStatus::Running)
        .with_task("SQL", TaskStatus::Running, None)
        .with_task("Merge", TaskStatus::Waiting, None);
    assert_eq!(snapshot.progress_line(), "SQL: running, Merge: waiting");
}

#[test]
fn progress_line_without_tasks_uses_status() {
    let snapshot = JobSnapshot::new("j1", JobStatus::Submitted);
    assert_eq!(snapshot.progress_line(), "j1: submitted");
}

#[test]
fn with_child_uses_id_as_name() {
    let snapshot = JobSnapshot::new("root", JobStatus::Running).with_child("c1", NodeKind::Local);
    assert_eq!(snapshot.children[0].name, "c1");
    assert_eq!(snapshot.children[0].kind, NodeKind::Local);
}

#[test]
fn config_settings_decodes_property() {
    let mut config = JobConfig::new(JobKind::Sql, "select 1");
    config
        .properties
        .insert(SETTINGS_PROPERTY.into(), r#"{"a":"1"}"#.into());
    let settings = config.settings().unwrap();
    assert_eq!(settings.get("a").map(String::as_str), Some("1"));
}

#[test]
fn config_settings_rejects_garbage() {
    let mut config = JobConfig::new(JobKind::Sql, "select 1");
    config
        .properties
        .insert(SETTINGS_PROPERTY.into(), "not json".into());
    assert!(config.settings().is_none());
}

fn summary(owner: &str, status: JobStatus, start: u64) -> JobSummary {
    JobSummary::new("j", owner, status, start)
}

#[test]
fn filter_time_window_is_half_open() {
    let filter = JobFilter {
        since_ms: Some(100),
        until_ms: Some(200),
        ..Default::default()
    };
    assert!(!filter.matches(&summary("me", JobStatus::Running, 99), None));
    assert!(filter.matches(&summary("me", JobStatus::Running, 100), None));
    assert!(!filter.matches(&summary("me", JobStatus::Running, 200), None));
}

#[test]
fn filter_owner_only_checks_owner() {
    let filter = JobFilter {
        owner_only: true,
        ..Default::default()
    };
    assert!(filter.matches(&summary("me", JobStatus::Running, 0), Some("me")));
    assert!(!filter.matches(&summary("you", JobStatus::Running, 0), Some("me")));
}

#[test]
fn filter_statuses() {
    let filter = JobFilter {
        statuses: vec![JobStatus::Submitted, JobStatus::Running],
        ..Default::default()
    };
    assert!(filter.matches(&summary("me", JobStatus::Submitted, 0), None));
    assert!(!filter.matches(&summary("me", JobStatus::Success, 0), None));
}
