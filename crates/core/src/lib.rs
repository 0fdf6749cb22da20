// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! oc-core: session state and job model for the oc console

pub mod clock;
pub mod fallback;
pub mod id;
pub mod job;
pub mod session;
pub mod settings;
pub mod time_fmt;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use fallback::{FallbackError, FallbackFlag, FallbackPolicy, FALLBACK_KEY_PREFIX};
pub use id::{IdGen, IdempotencyToken, SequentialIdGen, UuidIdGen};
pub use job::{
    ChildNode, JobConfig, JobFilter, JobId, JobKind, JobSnapshot, JobStatus, JobSummary, NodeKind,
    TaskSnapshot, TaskStatus, ALIASES_PROPERTY, SETTINGS_PROPERTY,
};
pub use session::{
    Credentials, ProjectDefaults, ProjectSwitch, SessionContext, SessionError, SessionFlags,
    SettingTarget, DEFAULT_SCHEMA_KEY, MAX_PRIORITY, NAMESPACE_SCHEMA_KEY, PRIORITY_KEY,
    RUNNING_CLUSTER_KEY, TIMEZONE_KEY,
};
pub use settings::{Aliases, KeyValueMap, Settings};
pub use time_fmt::{format_age, format_elapsed, format_timestamp, parse_date};
