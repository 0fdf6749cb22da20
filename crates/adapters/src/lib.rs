// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the remote service and the terminal

mod error;
pub mod job;
pub mod logview;
pub mod meta;
pub mod offline;
pub mod output;
pub mod prompt;
pub mod traced;

pub use error::{RemoteError, TRANSIENT_SERVER_CODES};
pub use job::JobApi;
pub use logview::{LogViewLinker, NoLogView, TemplateLinker};
pub use meta::{
    Description, Listing, ListQuery, MetaApi, ObjectKind, ObjectRef, ProjectInfo, ResourceKind,
    ResourceSpec, SecurityValue,
};
pub use offline::OfflineBackend;
pub use output::{ConsoleSink, OutputSink};
pub use prompt::{LinePrompter, LineReader, PromptError, Prompter};
pub use traced::{TracedJobApi, TracedMetaApi};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use job::{FakeJobApi, JobCall};
#[cfg(any(test, feature = "test-support"))]
pub use meta::{FakeMetaApi, MetaCall};
#[cfg(any(test, feature = "test-support"))]
pub use output::{MemorySink, SinkLine};
#[cfg(any(test, feature = "test-support"))]
pub use prompt::ScriptedPrompter;
