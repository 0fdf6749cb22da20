// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Job submission and tracking for the oc console

mod diagnose;
pub mod env;
mod error;
mod interrupt;
mod merge;
mod poll;
mod queue;
mod runner;
mod submit;
mod tracker;

pub use diagnose::diagnose;
pub use error::EngineError;
pub use interrupt::Interrupt;
pub use merge::{build_config, Overrides};
pub use poll::{Poller, Tick};
pub use queue::{queue_filter, watch_queue, WatchEnd};
pub use runner::{JobRequest, JobRunner, RunnerConfig, SubmitOutcome};
pub use submit::{RetryState, Submitter};
pub use tracker::{TrackOptions, Tracker};
