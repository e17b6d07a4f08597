// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zerozero_timing --heading-base-level=0

//! Zerozero Timing: host-agnostic timer primitives for UI sequencing.
//!
//! This crate does not talk to any event loop. Hosts feed it timestamps
//! (`u64` milliseconds on a monotonic timeline of their choosing) and it
//! answers the only two questions a cooperative UI runtime needs:
//!
//! - Which scheduled timers are due at `now`, in deadline order?
//! - When is the next deadline, so the host knows when to wake up again?
//!
//! The core type is [`TimerQueue`], an owned queue of payload-carrying timers.
//! A state machine that owns a queue owns every timer it ever scheduled:
//! clearing or dropping the queue is enough to guarantee that nothing fires
//! after teardown. [`ManualClock`] is a small virtual clock for tests and
//! headless demos.
//!
//! ## Minimal example
//!
//! ```rust
//! use zerozero_timing::{ManualClock, TimerQueue};
//!
//! #[derive(Debug, PartialEq)]
//! enum Tick {
//!     Reveal,
//!     Hide,
//! }
//!
//! let mut clock = ManualClock::new(0);
//! let mut timers = TimerQueue::new();
//! timers.schedule_after(clock.now(), 100, Tick::Reveal);
//! let hide = timers.schedule_after(clock.now(), 250, Tick::Hide);
//!
//! clock.advance(120);
//! let due = timers.pop_due(clock.now()).unwrap();
//! assert_eq!(due.payload, Tick::Reveal);
//! assert_eq!(due.deadline, 100);
//!
//! // Teardown: cancelled timers never come back.
//! assert_eq!(timers.cancel(hide), Some(Tick::Hide));
//! clock.advance(1_000);
//! assert!(timers.pop_due(clock.now()).is_none());
//! ```
//!
//! ## Ordering
//!
//! Timers are yielded by ascending deadline. Timers sharing a deadline are
//! yielded in the order they were scheduled, so a zero-length delay scheduled
//! while handling an expired timer runs after the timers that were already
//! waiting for that instant.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod clock;
mod queue;

pub use clock::ManualClock;
pub use queue::{Expired, TimerId, TimerQueue};
