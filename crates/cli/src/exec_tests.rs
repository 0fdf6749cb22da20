// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::context::test_support::Harness;
use crate::grammar::{resolve, resolve_script};
use oc_adapters::{MetaCall, RemoteError, ScriptedPrompter};
use oc_engine::EngineError;
use std::time::Duration;

fn command(h: &Harness, text: &str) -> Command {
    resolve(text, &h.console.session).unwrap()
}

fn describe_calls(h: &Harness) -> usize {
    h.meta
        .calls()
        .iter()
        .filter(|c| matches!(c, MetaCall::Describe(_)))
        .count()
}

#[tokio::test]
async fn quit_stops_the_caller() {
    let mut h = Harness::new();
    let cmd = command(&h, "quit");
    assert_eq!(h.console.execute(&cmd).await.unwrap(), Flow::Quit);
}

#[tokio::test]
async fn retry_count_three_makes_three_attempts() {
    let mut h = Harness::in_project();
    h.console.session.retry_count = 3;
    for _ in 0..3 {
        h.meta.fail_next(
            RemoteError::server("InternalServerError", "meta store down").with_request_id("req-9"),
        );
    }
    let cmd = command(&h, "desc t");

    let err = h.console.execute(&cmd).await.unwrap_err();

    assert_eq!(describe_calls(&h), 3);
    assert_eq!(
        err.downcast_ref::<ConsoleError>(),
        Some(&ConsoleError::RetriesExhausted {
            attempts: 3,
            message: "InternalServerError: meta store down".into(),
            request_id: Some("req-9".into()),
        })
    );
    assert!(err.to_string().starts_with("failed after 3 attempt(s): "));
}

#[tokio::test]
async fn retry_stops_at_first_success() {
    let mut h = Harness::in_project();
    h.console.session.retry_count = 3;
    h.meta.fail_next(RemoteError::Io("connection reset".into()));
    let cmd = command(&h, "desc t");

    h.console.execute(&cmd).await.unwrap();

    assert_eq!(describe_calls(&h), 2);
    assert_eq!(h.sink.results().len(), 1);
}

#[tokio::test]
async fn single_attempt_keeps_the_original_error() {
    let mut h = Harness::in_project();
    h.meta.fail_next(RemoteError::server("NoSuchObject", "table t not found"));
    let cmd = command(&h, "desc t");

    let err = h.console.execute(&cmd).await.unwrap_err();

    assert_eq!(describe_calls(&h), 1);
    assert!(err.is::<RemoteError>());
}

#[tokio::test]
async fn unavailable_backend_is_not_retried() {
    let mut h = Harness::in_project();
    h.console.session.retry_count = 5;
    h.meta
        .fail_next(RemoteError::Unavailable("no endpoint configured".into()));
    let cmd = command(&h, "desc t");

    let err = h.console.execute(&cmd).await.unwrap_err();

    assert_eq!(describe_calls(&h), 1);
    assert!(err.is::<RemoteError>());
}

#[tokio::test(start_paused = true)]
async fn poll_failure_does_not_resubmit_the_job() {
    let mut h = Harness::in_project();
    h.console.session.retry_count = 3;
    h.jobs.fail_next_get(RemoteError::Io("connection reset".into()));
    let cmd = command(&h, "select 1");

    let err = h.console.execute(&cmd).await.unwrap_err();

    assert_eq!(h.jobs.submissions().len(), 1);
    assert!(matches!(
        err.downcast_ref::<EngineError>(),
        Some(EngineError::Tracking { job_id, .. }) if job_id == "job-1"
    ));
}

#[tokio::test(start_paused = true)]
async fn unresolved_submission_is_resubmitted_once_per_command() {
    let mut h = Harness::in_project();
    h.console.session.retry_count = 3;
    for _ in 0..6 {
        h.jobs
            .push_submit_result(Err(RemoteError::Io("connection reset".into())));
    }
    let cmd = command(&h, "select 1");

    let err = h.console.execute(&cmd).await.unwrap_err();

    assert_eq!(h.jobs.submissions().len(), 2);
    assert!(err.downcast_ref::<ConsoleError>().is_none());
    assert_eq!(err.to_string(), "network error: connection reset");
}

#[tokio::test]
async fn describe_shard_without_project() {
    let mut h = Harness::new();
    h.console.session.retry_count = 3;
    let cmd = command(&h, "describe shard t");

    let err = h.console.execute(&cmd).await.unwrap_err();

    assert_eq!(err.to_string(), "project not set, run 'use <project>' first");
    assert!(h.meta.calls().is_empty());
}

#[tokio::test]
async fn use_project_clears_settings() {
    let mut h = Harness::in_project();
    for text in ["set odps.foo=bar", "alias x=y", "use p2"] {
        let cmd = command(&h, text);
        h.console.execute(&cmd).await.unwrap();
    }
    assert_eq!(h.console.session.project(), Some("p2"));
    assert!(h.console.session.settings.is_empty());
    assert!(h.console.session.aliases.is_empty());
}

#[tokio::test]
async fn composite_stops_at_failing_member() {
    let mut h = Harness::in_project();
    let script =
        resolve_script("set a=1; desc t; set b=2;", &h.console.session).unwrap();
    h.meta.fail_next(
        RemoteError::server("NoSuchObject", "table t not found").with_request_id("req-1"),
    );

    let err = script.run(&mut h.console).await.unwrap_err();

    assert_eq!(h.console.session.settings.get("a"), Some("1"));
    assert_eq!(h.console.session.settings.get("b"), None);
    assert_eq!(
        err.downcast_ref::<ConsoleError>(),
        Some(&ConsoleError::Domain {
            message: "NoSuchObject: table t not found".into(),
            request_id: Some("req-1".into()),
        })
    );
}

#[tokio::test]
async fn composite_passes_structured_errors_through() {
    let mut h = Harness::new();
    let script = resolve_script("desc t; set b=2", &h.console.session).unwrap();

    let err = script.run(&mut h.console).await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<ConsoleError>(),
        Some(&ConsoleError::Session(oc_core::SessionError::ProjectNotSet))
    );
    assert!(h.console.session.settings.is_empty());
}

#[tokio::test]
async fn composite_quit_skips_the_rest() {
    let mut h = Harness::in_project();
    let script = resolve_script("set a=1; quit; set b=2", &h.console.session).unwrap();

    assert_eq!(script.run(&mut h.console).await.unwrap(), Flow::Quit);
    assert_eq!(h.console.session.settings.get("b"), None);
}

#[tokio::test]
async fn audit_hook_runs_before_command() {
    let mut h = Harness::in_project();
    h.console.session.hooks.set("desc_table", "audit");
    let cmd = command(&h, "desc t");

    h.console.execute(&cmd).await.unwrap();

    let text = h.sink.text();
    let audit = text.find("audit: desc t").unwrap();
    let name = text.find("Name:").unwrap();
    assert!(audit < name);
}

#[tokio::test]
async fn hook_only_fires_for_its_family() {
    let mut h = Harness::in_project();
    h.console.session.hooks.set("desc_table", "audit");
    let cmd = command(&h, "desc function f");

    h.console.execute(&cmd).await.unwrap();

    assert_eq!(h.sink.count_containing("audit:"), 0);
}

#[tokio::test]
async fn unknown_hook_is_ignored() {
    let mut h = Harness::in_project();
    h.console.session.hooks.set("desc_table", "notify_slack");
    let cmd = command(&h, "desc t");

    h.console.execute(&cmd).await.unwrap();

    assert_eq!(describe_calls(&h), 1);
}

#[tokio::test]
async fn whoami_hook_prints_identity_first() {
    let mut h = Harness::in_project();
    h.console.session.hooks.set("sql", "whoami");
    h.console.session.flags.async_mode = true;
    let cmd = command(&h, "select 1");

    h.console.execute(&cmd).await.unwrap();

    let text = h.sink.text();
    assert!(text.find("Project:").unwrap() < text.find("ID = job-1").unwrap());
}

fn interactive(prompter: ScriptedPrompter) -> Harness {
    let mut h = Harness::with_prompter(prompter);
    h.console.session.init_project(Some("p1".into()));
    h.console.session.flags.interactive = true;
    h
}

#[tokio::test]
async fn declined_confirmation_skips_command() {
    let mut h = interactive(ScriptedPrompter::new([false]));
    let cmd = command(&h, "drop resource r.jar");

    assert_eq!(h.console.execute(&cmd).await.unwrap(), Flow::Continue);

    assert!(h.meta.calls().is_empty());
    assert_eq!(h.prompter.questions(), vec!["Confirm to \"drop resource r.jar\""]);
}

#[tokio::test]
async fn accepted_confirmation_runs_command() {
    let mut h = interactive(ScriptedPrompter::new([true]));
    let cmd = command(&h, "drop resource r.jar");

    h.console.execute(&cmd).await.unwrap();

    assert_eq!(h.meta.calls().len(), 1);
}

#[tokio::test]
async fn closed_input_declines() {
    let mut h = interactive(ScriptedPrompter::new([]));
    let cmd = command(&h, "drop resource r.jar");

    h.console.execute(&cmd).await.unwrap();

    assert!(h.meta.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn interrupt_during_confirmation_declines() {
    let mut h = interactive(ScriptedPrompter::hanging());
    let cmd = command(&h, "drop resource r.jar");
    let interrupt = h.console.interrupt().clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        interrupt.trigger();
    });

    assert_eq!(h.console.execute(&cmd).await.unwrap(), Flow::Continue);

    assert!(h.meta.calls().is_empty());
    assert!(!h.console.interrupt().is_set());
}

#[tokio::test]
async fn assume_yes_skips_prompt() {
    let mut h = interactive(ScriptedPrompter::new([]));
    h.console.session.flags.assume_yes = true;
    let cmd = command(&h, "drop resource r.jar");

    h.console.execute(&cmd).await.unwrap();

    assert!(h.prompter.questions().is_empty());
    assert_eq!(h.meta.calls().len(), 1);
}

#[tokio::test]
async fn batch_mode_never_prompts() {
    let mut h = Harness::in_project();
    let cmd = command(&h, "drop resource r.jar");

    h.console.execute(&cmd).await.unwrap();

    assert!(h.prompter.questions().is_empty());
    assert_eq!(h.meta.calls().len(), 1);
}

#[tokio::test]
async fn harmless_statement_never_prompts() {
    let mut h = interactive(ScriptedPrompter::new([]));
    let cmd = command(&h, "desc t");

    h.console.execute(&cmd).await.unwrap();

    assert!(h.prompter.questions().is_empty());
}
