// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zerozero_sequence --heading-base-level=0

//! Zerozero Sequence: timed reveal sequencers for onboarding-style UI.
//!
//! Each sequencer is a small, self-contained state machine that reveals
//! content over time and signals completion exactly once:
//!
//! - [`TypingSequencer`]: types lines one character at a time with a blinking caret.
//! - [`WordRevealSequencer`]: reveals a text block one word at a time, holds, then exits.
//! - [`TimedDismissSequencer`]: shows a static visual for a fixed time, then fades it out.
//! - [`SequenceChain`]: runs any of the above back to back.
//!
//! ## Driving a sequencer
//!
//! Sequencers never read a clock. The host passes the current time, in
//! milliseconds on any monotonic timeline, to [`Sequencer::advance`]; every
//! transition due at or before that time is applied in order, and follow-up
//! transitions are scheduled relative to when their predecessor was due. A
//! virtual clock such as `zerozero_timing::ManualClock` therefore makes every
//! timeline testable without real delays:
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use zerozero_sequence::{Sequencer, Status, WordRevealConfig, WordRevealSequencer};
//! use zerozero_timing::ManualClock;
//!
//! let done = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&done);
//!
//! let mut clock = ManualClock::new(0);
//! let mut reveal = WordRevealSequencer::start(WordRevealConfig::new("zero zero"), clock.now())
//!     .on_complete(move || flag.set(true));
//!
//! while reveal.advance(clock.now()) == Status::Running {
//!     // A real host would render `reveal.visible_words()` here.
//!     clock.advance(16);
//! }
//!
//! assert!(done.get());
//! assert_eq!(reveal.visible_count(), 2);
//! ```
//!
//! ## Completion and teardown
//!
//! The terminal state of every sequencer is a variant of its phase enum, and
//! the completion callback is consumed when it fires, so a second firing is
//! impossible. [`Sequencer::dispose`] cancels every pending timer and drops the
//! callback; dropping a sequencer has the same effect, since it owns all of its
//! timers.
//!
//! ## Features
//!
//! - `std` (default): forwards to `tracing/std`.
//! - `serde`: derive `Serialize`/`Deserialize` for the configuration types.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod chain;
mod dismiss;
mod sequencer;
mod typing;
mod word_reveal;

pub use chain::{SequenceChain, Stage, StageFactory};
pub use dismiss::{DismissConfig, DismissPhase, TimedDismissSequencer};
pub use sequencer::{Completion, Sequencer, Status};
pub use typing::{
    CARET_BLINK_INTERVAL_MS, DEFAULT_MESSAGE_DELAY_MS, DEFAULT_TYPING_SPEED_MS, TypingConfig,
    TypingPhase, TypingSequencer,
};
pub use word_reveal::{
    DEFAULT_HOLD_DELAY_MS, DEFAULT_WORD_DELAY_MS, WORD_REVEAL_EXIT_MS, WordPhase,
    WordRevealConfig, WordRevealSequencer,
};

/// Fraction of `duration_ms` elapsed between `since` and `now`, clamped to `0.0..=1.0`.
///
/// A zero duration is already over.
fn progress(since: u64, now: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = now.saturating_sub(since).min(duration_ms);
    elapsed as f64 / duration_ms as f64
}
