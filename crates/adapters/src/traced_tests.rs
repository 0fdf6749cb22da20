// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::job::{FakeJobApi, JobCall};
use crate::meta::{FakeMetaApi, MetaCall, ObjectKind};
use oc_core::{IdempotencyToken, JobKind, JobStatus};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// A writer that captures log output for testing
#[derive(Clone, Default)]
struct CapturedLogs {
    logs: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    fn contents(&self) -> String {
        let logs = self.logs.lock().unwrap();
        String::from_utf8_lossy(&logs).to_string()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.logs.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run a test with captured tracing output
fn with_tracing<F, Fut>(f: F) -> (String, Fut::Output)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future,
{
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let result = tracing::subscriber::with_default(subscriber, || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
            .block_on(f())
    });

    (logs.contents(), result)
}

/// Assert that captured logs contain the expected substring
fn assert_log(logs: &str, label: &str, expected: &str) {
    assert!(logs.contains(expected), "Should log {label}. Logs:\n{logs}");
}

fn sql(statement: &str) -> JobConfig {
    let mut config = JobConfig::new(JobKind::Sql, statement);
    config.token = Some(IdempotencyToken::new("tok-1"));
    config
}

#[test]
#[serial(tracing)]
fn submit_logs_span_token_and_job_id() {
    let (logs, result) = with_tracing(|| async {
        let traced = TracedJobApi::new(FakeJobApi::new());
        traced.submit(&sql("select 1")).await
    });

    assert!(result.is_ok(), "submit should succeed: {result:?}");
    assert_log(&logs, "span name", "job.submit");
    assert_log(&logs, "token", "tok-1");
    assert_log(&logs, "entry message", "submitting");
    assert_log(&logs, "completion", "job created");
    assert_log(&logs, "job id", "job-1");
    assert_log(&logs, "timing", "elapsed_ms");
}

#[test]
#[serial(tracing)]
fn submit_failure_logs_transient_flag() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeJobApi::new();
        fake.push_submit_result(Err(RemoteError::Io("connection reset".into())));
        TracedJobApi::new(fake).submit(&sql("select 1")).await
    });

    assert!(result.is_err());
    assert_log(&logs, "failure", "submit failed");
    assert_log(&logs, "transient flag", "transient=true");
}

#[test]
#[serial(tracing)]
fn stop_logs_request() {
    let (logs, _) = with_tracing(|| async {
        TracedJobApi::new(FakeJobApi::new())
            .stop(&JobId::new("j1"))
            .await
    });

    assert_log(&logs, "stop span", "job.stop");
    assert_log(&logs, "stop completion", "stop requested");
}

#[test]
#[serial(tracing)]
fn meta_failure_logs_request_id() {
    let (logs, result) = with_tracing(|| async {
        let fake = FakeMetaApi::new();
        fake.fail_next(RemoteError::server("NoSuchObject", "missing").with_request_id("req-42"));
        TracedMetaApi::new(fake)
            .describe(&ObjectRef::new(ObjectKind::Table, "p", "t"))
            .await
    });

    assert!(result.is_err());
    assert_log(&logs, "span name", "meta.describe");
    assert_log(&logs, "request id", "req-42");
}

// =============================================================================
// Delegation tests - verify traced wrappers delegate to the inner adapter
// =============================================================================

#[tokio::test]
async fn job_api_delegates_every_call() {
    let fake = FakeJobApi::new();
    let traced = TracedJobApi::new(fake.clone());

    let id = traced.submit(&sql("select 1")).await.unwrap();
    let snapshot = traced.get(&id).await.unwrap();
    traced.stop(&id).await.unwrap();
    let jobs = traced.list(&JobFilter::default()).await.unwrap();

    assert_eq!(snapshot.status, JobStatus::Success);
    assert_eq!(jobs.len(), 1);
    let calls = fake.calls();
    assert_eq!(calls.len(), 4);
    assert!(matches!(calls[0], JobCall::Submit(_)));
    assert!(matches!(calls[3], JobCall::List(_)));
}

#[tokio::test]
async fn meta_api_delegates_every_call() {
    let fake = FakeMetaApi::new();
    let traced = TracedMetaApi::new(fake.clone());

    traced.project_info("p").await.unwrap();
    traced
        .update_security("p", "LabelSecurity", &SecurityValue::Flag(true))
        .await
        .unwrap();
    traced.attach_session("p", "public.default").await.unwrap();

    assert_eq!(
        fake.calls(),
        vec![
            MetaCall::ProjectInfo("p".into()),
            MetaCall::UpdateSecurity {
                project: "p".into(),
                key: "LabelSecurity".into(),
                value: SecurityValue::Flag(true),
            },
            MetaCall::AttachSession {
                project: "p".into(),
                session: "public.default".into(),
            },
        ]
    );
}
