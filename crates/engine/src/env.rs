// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.
//!
//! Each getter returns `None` when the variable is unset or unparsable so
//! configured values stay in effect.

use std::time::Duration;

fn parse_u64(var: &str) -> Option<u64> {
    std::env::var(var).ok().and_then(|s| s.trim().parse::<u64>().ok())
}

// --- Polling ---

pub fn wait_poll() -> Option<Duration> {
    parse_u64("OC_WAIT_POLL_MS").map(Duration::from_millis)
}

// --- Lost-submission recovery ---

pub fn retry_backoff() -> Option<Duration> {
    parse_u64("OC_RETRY_BACKOFF_MS").map(Duration::from_millis)
}

pub fn retry_window() -> Option<Duration> {
    parse_u64("OC_RETRY_WINDOW_SECS").map(Duration::from_secs)
}
