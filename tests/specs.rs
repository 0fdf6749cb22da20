// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specifications for the oc console.
//!
//! These tests are black-box: they invoke the binary and verify stdout,
//! stderr and exit codes. No remote service is reachable, so anything that
//! needs one exercises the offline backend's error path.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/help.rs"]
mod cli_help;

// console/
#[path = "specs/console/batch.rs"]
mod console_batch;
#[path = "specs/console/interactive.rs"]
mod console_interactive;
