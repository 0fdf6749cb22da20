// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use super::*;

fn poller(interval_ms: u64, timeout: Option<Duration>) -> (Poller, Interrupt) {
    let interrupt = Interrupt::new();
    (
        Poller::new(Duration::from_millis(interval_ms), timeout, interrupt.clone()),
        interrupt,
    )
}

#[tokio::test(start_paused = true)]
async fn tick_returns_ready_before_deadline() {
    let (mut poller, _) = poller(10, Some(Duration::from_secs(5)));
    assert_eq!(poller.tick().await, Tick::Ready);
}

#[tokio::test(start_paused = true)]
async fn tick_returns_timeout_when_deadline_expires_during_sleep() {
    let (mut poller, _) = poller(50, Some(Duration::from_millis(1)));
    assert_eq!(poller.tick().await, Tick::Timeout);
}

#[tokio::test(start_paused = true)]
async fn tick_returns_timeout_when_already_expired() {
    let (mut poller, _) = poller(10, Some(Duration::ZERO));
    assert_eq!(poller.tick().await, Tick::Timeout);
}

#[tokio::test(start_paused = true)]
async fn tick_no_timeout_polls_indefinitely() {
    let (mut poller, _) = poller(10, None);
    for _ in 0..5 {
        assert_eq!(poller.tick().await, Tick::Ready);
    }
}

#[tokio::test(start_paused = true)]
async fn interrupt_set_between_ticks_is_not_lost() {
    let (mut poller, interrupt) = poller(10, None);
    assert_eq!(poller.tick().await, Tick::Ready);
    interrupt.trigger();
    assert_eq!(poller.tick().await, Tick::Interrupted);
}

#[tokio::test(start_paused = true)]
async fn interrupt_during_sleep_cuts_tick_short() {
    let (mut poller, interrupt) = poller(60_000, None);
    let trigger = interrupt.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(1)).await;
        trigger.trigger();
    });
    let started = Instant::now();
    assert_eq!(poller.tick().await, Tick::Interrupted);
    assert!(started.elapsed() < Duration::from_secs(60));
}

#[tokio::test(start_paused = true)]
async fn sleep_unless_interrupted_reports_outcome() {
    let interrupt = Interrupt::new();
    assert!(sleep_unless_interrupted(Duration::from_secs(3), &interrupt).await);
    interrupt.trigger();
    assert!(!sleep_unless_interrupted(Duration::from_secs(3), &interrupt).await);
}
