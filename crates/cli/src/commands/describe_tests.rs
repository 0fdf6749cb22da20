// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::context::test_support::Harness;
use crate::error::ConsoleError;
use crate::grammar::QualifiedName;
use oc_adapters::{Description, MetaCall, ObjectKind, ObjectRef};
use oc_core::SessionError;

#[tokio::test]
async fn shard_without_project_makes_no_remote_call() {
    let h = Harness::new();

    let err = h
        .console
        .describe(ObjectKind::Shard, &QualifiedName::bare("t"), None, false)
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<ConsoleError>(),
        Some(&ConsoleError::Session(SessionError::ProjectNotSet))
    );
    assert!(err.to_string().contains("project not set"));
    assert!(h.meta.calls().is_empty());
}

#[tokio::test]
async fn table_uses_session_project_and_schema() {
    let mut h = Harness::in_project();
    h.console.session.set_schema(Some("s1".into()));
    h.meta
        .set_description(Description::default().field("Name", "t").field("Owner", "alice"));

    h.console
        .describe(ObjectKind::Table, &QualifiedName::bare("t"), None, true)
        .await
        .unwrap();

    let mut expected = ObjectRef::new(ObjectKind::Table, "p1", "t");
    expected.schema = Some("s1".into());
    expected.extended = true;
    assert_eq!(h.meta.calls(), vec![MetaCall::Describe(expected)]);
    assert_eq!(h.sink.results(), vec!["Name:   t\nOwner:  alice"]);
}

#[tokio::test]
async fn explicit_project_wins() {
    let h = Harness::in_project();
    let name = QualifiedName {
        project: Some("p2".into()),
        schema: None,
        name: "t".into(),
    };

    h.console
        .describe(ObjectKind::Table, &name, None, false)
        .await
        .unwrap();

    assert!(matches!(&h.meta.calls()[0], MetaCall::Describe(t) if t.project == "p2"));
}

#[tokio::test]
async fn project_needs_no_active_project() {
    let h = Harness::new();
    h.console
        .describe(ObjectKind::Project, &QualifiedName::bare("p9"), None, false)
        .await
        .unwrap();
    let expected = ObjectRef::new(ObjectKind::Project, "p9", "p9");
    assert_eq!(h.meta.calls(), vec![MetaCall::Describe(expected)]);
}

#[tokio::test]
async fn json_description() {
    let mut h = Harness::in_project();
    h.console.session.flags.machine_readable = true;

    h.console
        .describe(ObjectKind::Function, &QualifiedName::bare("f"), None, false)
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&h.sink.results()[0]).unwrap();
    assert_eq!(value["Name"], "f");
    assert_eq!(value["Kind"], "function");
}
