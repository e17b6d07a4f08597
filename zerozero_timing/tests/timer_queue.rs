// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `zerozero_timing` crate.
//!
//! These drive a [`TimerQueue`] the way a sequencer does: handlers reschedule
//! relative to the expired deadline while a [`ManualClock`] jumps forward.

use zerozero_timing::{ManualClock, TimerQueue};

#[test]
fn rescheduling_from_deadline_replays_steady_ticks() {
    let mut clock = ManualClock::new(0);
    let mut timers = TimerQueue::new();
    timers.schedule_after(clock.now(), 10, 0_u32);

    // One big jump should produce the same firings as ten small ones.
    clock.advance(100);
    let mut fired = Vec::new();
    while let Some(due) = timers.pop_due(clock.now()) {
        fired.push(due.deadline);
        if due.payload < 9 {
            timers.schedule_after(due.deadline, 10, due.payload + 1);
        }
    }

    assert_eq!(fired, (1..=10).map(|n| n * 10).collect::<Vec<u64>>());
    assert!(timers.is_empty());
}

#[test]
fn zero_delay_follow_up_runs_in_same_drain() {
    let mut timers = TimerQueue::new();
    timers.schedule(0, "start");

    let mut fired = Vec::new();
    while let Some(due) = timers.pop_due(0) {
        fired.push(due.payload);
        if due.payload == "start" {
            timers.schedule_after(due.deadline, 0, "follow-up");
        }
    }

    assert_eq!(fired, ["start", "follow-up"]);
}

#[test]
fn follow_up_waits_behind_already_pending_peers() {
    let mut timers = TimerQueue::new();
    timers.schedule(5, "a");
    timers.schedule(5, "b");

    let mut fired = Vec::new();
    while let Some(due) = timers.pop_due(5) {
        fired.push(due.payload);
        if due.payload == "a" {
            timers.schedule_after(due.deadline, 0, "a-follow-up");
        }
    }

    assert_eq!(fired, ["a", "b", "a-follow-up"]);
}

#[test]
fn cleared_queue_never_fires() {
    let mut clock = ManualClock::new(0);
    let mut timers = TimerQueue::new();
    timers.schedule_after(clock.now(), 10, ());
    timers.schedule_after(clock.now(), 20, ());

    clock.advance(5);
    assert_eq!(timers.clear(), 2);
    clock.advance(1_000);
    assert!(timers.pop_due(clock.now()).is_none());
    assert_eq!(timers.next_deadline(), None);
}
