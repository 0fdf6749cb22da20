// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Polling loop helper shared by job waits and queue watching.

use crate::interrupt::Interrupt;
use std::time::Duration;
use tokio::time::Instant;

/// Result of waiting for the next poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Ready,
    Timeout,
    Interrupted,
}

/// Interval timing with an optional deadline and Ctrl+C handling.
pub struct Poller {
    interval: Duration,
    deadline: Option<Instant>,
    interrupt: Interrupt,
}

impl Poller {
    pub fn new(interval: Duration, timeout: Option<Duration>, interrupt: Interrupt) -> Self {
        Self {
            interval,
            deadline: timeout.map(|t| Instant::now() + t),
            interrupt,
        }
    }

    /// Sleep one interval.
    ///
    /// Interruption wins over everything, including an interrupt that landed
    /// between ticks. The deadline is checked before and after sleeping.
    pub async fn tick(&mut self) -> Tick {
        if self.interrupt.is_set() {
            return Tick::Interrupted;
        }
        if self.expired() {
            return Tick::Timeout;
        }

        tokio::select! {
            _ = self.interrupt.wait() => Tick::Interrupted,
            _ = tokio::time::sleep(self.interval) => {
                if self.expired() {
                    Tick::Timeout
                } else {
                    Tick::Ready
                }
            }
        }
    }

    fn expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

/// Sleep for `duration` unless interrupted first. Returns false on interrupt.
pub(crate) async fn sleep_unless_interrupted(duration: Duration, interrupt: &Interrupt) -> bool {
    if interrupt.is_set() {
        return false;
    }
    tokio::select! {
        _ = interrupt.wait() => false,
        _ = tokio::time::sleep(duration) => true,
    }
}

#[cfg(test)]
#[path = "poll_tests.rs"]
mod tests;
