// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word-by-word reveal of a single block of text.
//!
//! Words come from splitting the text on single spaces. Consecutive, leading
//! or trailing spaces produce empty words that still take a reveal step;
//! hosts that want a smarter tokenizer should normalise the text first.
//!
//! ## Timeline
//!
//! One more word every `word_delay_ms` until every word is visible, then a
//! hold of `hold_delay_ms`, then an exit of [`WORD_REVEAL_EXIT_MS`] during
//! which hosts fade the block out. The completion callback fires at the end of
//! the exit.
//!
//! ```
//! use zerozero_sequence::{Sequencer, Status, WordRevealConfig, WordRevealSequencer};
//!
//! let config = WordRevealConfig {
//!     word_delay_ms: 100,
//!     ..WordRevealConfig::new("ready now")
//! };
//! let mut reveal = WordRevealSequencer::start(config, 0);
//!
//! assert_eq!(reveal.visible_count(), 0);
//! reveal.advance(100);
//! assert_eq!(reveal.visible_words().collect::<Vec<_>>(), ["ready"]);
//! reveal.advance(200);
//! assert_eq!(reveal.visible_count(), 2);
//!
//! // Hold (1200 ms) then exit (800 ms).
//! assert_eq!(reveal.advance(2_199), Status::Running);
//! assert_eq!(reveal.advance(2_200), Status::Complete);
//! ```

use alloc::string::String;

use tracing::{debug, trace};
use zerozero_timing::TimerQueue;

use crate::{Completion, Sequencer, Status};

/// Default delay between successive words.
pub const DEFAULT_WORD_DELAY_MS: u64 = 150;
/// Default hold once every word is visible.
pub const DEFAULT_HOLD_DELAY_MS: u64 = 1200;
/// Length of the exit after the hold, before completion fires.
pub const WORD_REVEAL_EXIT_MS: u64 = 800;

/// Configuration for a [`WordRevealSequencer`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WordRevealConfig {
    /// The text to reveal; split on single spaces.
    pub text: String,
    /// Delay between successive words.
    pub word_delay_ms: u64,
    /// Hold once every word is visible.
    pub hold_delay_ms: u64,
}

impl Default for WordRevealConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            word_delay_ms: DEFAULT_WORD_DELAY_MS,
            hold_delay_ms: DEFAULT_HOLD_DELAY_MS,
        }
    }
}

impl WordRevealConfig {
    /// Default timings for `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Where a [`WordRevealSequencer`] is in its timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WordPhase {
    /// Words are still appearing.
    Revealing,
    /// Every word is visible.
    Holding,
    /// The block is on its way out; `since` is when the exit began.
    Exiting {
        /// Start of the exit.
        since: u64,
    },
    /// Terminal: the completion callback has fired.
    Complete,
    /// Terminal: disposed by the owner before completing.
    Disposed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tick {
    Word,
    EndHold,
    EndExit,
}

/// Reveals a block of text one word at a time.
#[derive(Debug)]
pub struct WordRevealSequencer {
    config: WordRevealConfig,
    word_count: usize,
    visible: usize,
    phase: WordPhase,
    timers: TimerQueue<Tick>,
    completion: Completion,
    completed_at: Option<u64>,
}

impl WordRevealSequencer {
    /// Starts the reveal at `now`; the first word appears `word_delay_ms` later.
    #[must_use]
    pub fn start(config: WordRevealConfig, now: u64) -> Self {
        let word_count = config.text.split(' ').count();
        let mut this = Self {
            config,
            word_count,
            visible: 0,
            phase: WordPhase::Revealing,
            timers: TimerQueue::new(),
            completion: Completion::default(),
            completed_at: None,
        };
        debug!(words = word_count, now, "word reveal started");
        this.timers
            .schedule_after(now, this.config.word_delay_ms, Tick::Word);
        this
    }

    /// Installs the callback fired once when the sequence completes.
    ///
    /// Install it before the first [`advance`](Sequencer::advance): a sequencer
    /// that has already finished never fires it.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        debug_assert!(
            !self.status().is_finished(),
            "on_complete installed after the sequencer finished"
        );
        self.completion = Completion::new(callback);
        self
    }

    /// The configuration this sequencer was started with.
    #[must_use]
    pub fn config(&self) -> &WordRevealConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> WordPhase {
        self.phase
    }

    /// Number of words in the text.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of words revealed so far. Never decreases.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// Every word of the text, visible or not.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.config.text.split(' ')
    }

    /// The words revealed so far, in order.
    pub fn visible_words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words().take(self.visible)
    }

    /// Opacity of the whole block at `now`: 1.0 until the exit, then a linear
    /// ramp down to 0.0.
    #[must_use]
    pub fn opacity(&self, now: u64) -> f64 {
        match self.phase {
            WordPhase::Revealing | WordPhase::Holding => 1.0,
            WordPhase::Exiting { since } => {
                1.0 - crate::progress(since, now, WORD_REVEAL_EXIT_MS)
            }
            WordPhase::Complete | WordPhase::Disposed => 0.0,
        }
    }

    fn on_tick(&mut self, tick: Tick, at: u64) {
        match (tick, self.phase) {
            (Tick::Word, WordPhase::Revealing) => {
                self.visible = (self.visible + 1).min(self.word_count);
                trace!(visible = self.visible, at, "word revealed");
                if self.visible == self.word_count {
                    self.phase = WordPhase::Holding;
                    self.timers
                        .schedule_after(at, self.config.hold_delay_ms, Tick::EndHold);
                } else {
                    self.timers
                        .schedule_after(at, self.config.word_delay_ms, Tick::Word);
                }
            }
            (Tick::EndHold, WordPhase::Holding) => {
                trace!(at, "hold over");
                self.phase = WordPhase::Exiting { since: at };
                self.timers
                    .schedule_after(at, WORD_REVEAL_EXIT_MS, Tick::EndExit);
            }
            (Tick::EndExit, WordPhase::Exiting { .. }) => {
                self.phase = WordPhase::Complete;
                self.completed_at = Some(at);
                self.timers.clear();
                debug!(at, "word reveal complete");
                self.completion.fire();
            }
            (tick, phase) => trace!(?tick, ?phase, "ignoring stale tick"),
        }
    }
}

impl Sequencer for WordRevealSequencer {
    fn advance(&mut self, now: u64) -> Status {
        while let Some(due) = self.timers.pop_due(now) {
            self.on_tick(due.payload, due.deadline);
        }
        self.status()
    }

    fn status(&self) -> Status {
        match self.phase {
            WordPhase::Complete => Status::Complete,
            WordPhase::Disposed => Status::Disposed,
            _ => Status::Running,
        }
    }

    fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    fn completed_at(&self) -> Option<u64> {
        self.completed_at
    }

    fn dispose(&mut self) {
        if self.status().is_finished() {
            return;
        }
        let dropped = self.timers.clear();
        self.completion.disarm();
        self.phase = WordPhase::Disposed;
        debug!(dropped, "word reveal disposed");
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::vec::Vec;
    use std::cell::Cell;
    use std::rc::Rc;

    fn config(text: &str, word_delay_ms: u64, hold_delay_ms: u64) -> WordRevealConfig {
        WordRevealConfig {
            text: text.into(),
            word_delay_ms,
            hold_delay_ms,
        }
    }

    #[test]
    fn defaults() {
        let config = WordRevealConfig::new("hello");
        assert_eq!(config.word_delay_ms, 150);
        assert_eq!(config.hold_delay_ms, 1200);
    }

    #[test]
    fn splits_on_single_spaces_only() {
        let reveal = WordRevealSequencer::start(config(" a  b ", 10, 10), 0);
        assert_eq!(reveal.words().collect::<Vec<_>>(), ["", "a", "", "b", ""]);
        assert_eq!(reveal.word_count(), 5);
    }

    #[test]
    fn empty_text_is_one_empty_word() {
        let mut reveal = WordRevealSequencer::start(config("", 10, 10), 0);
        assert_eq!(reveal.word_count(), 1);
        reveal.advance(10);
        assert_eq!(reveal.phase(), WordPhase::Holding);
    }

    #[test]
    fn visible_count_is_monotonic_and_complete_before_terminal() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut reveal = WordRevealSequencer::start(config("a b c", 10, 10), 0)
            .on_complete(move || seen.set(seen.get() + 1));

        let mut last = 0;
        for now in 0..=1_000 {
            let status = reveal.advance(now);
            assert!(reveal.visible_count() >= last);
            last = reveal.visible_count();
            if status == Status::Complete {
                assert_eq!(last, 3);
            }
        }
        assert_eq!(count.get(), 1);
        assert_eq!(reveal.completed_at(), Some(30 + 10 + WORD_REVEAL_EXIT_MS));
    }

    #[test]
    fn exit_fades_out() {
        let mut reveal = WordRevealSequencer::start(config("a", 10, 10), 0);
        reveal.advance(20);
        assert_eq!(reveal.phase(), WordPhase::Exiting { since: 20 });
        assert_eq!(reveal.opacity(20), 1.0);
        assert_eq!(reveal.opacity(420), 0.5);
        reveal.advance(820);
        assert_eq!(reveal.opacity(820), 0.0);
    }

    #[test]
    fn zero_delays_reveal_everything_on_first_advance() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut reveal = WordRevealSequencer::start(config("zero zero now", 0, 0), 5)
            .on_complete(move || seen.set(seen.get() + 1));

        assert_eq!(reveal.advance(5), Status::Running);
        assert_eq!(reveal.visible_count(), 3);
        assert_eq!(reveal.phase(), WordPhase::Exiting { since: 5 });

        assert_eq!(reveal.advance(804), Status::Running);
        assert_eq!(reveal.advance(805), Status::Complete);
        assert_eq!(reveal.completed_at(), Some(805));
        reveal.advance(10_000);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dispose_prevents_completion() {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let mut reveal = WordRevealSequencer::start(config("a b c", 10, 10), 0)
            .on_complete(move || seen.set(seen.get() + 1));
        reveal.advance(15);
        assert_eq!(reveal.visible_count(), 1);

        reveal.dispose();
        reveal.advance(10_000);

        assert_eq!(reveal.status(), Status::Disposed);
        assert_eq!(reveal.visible_count(), 1);
        assert_eq!(count.get(), 0);
    }
}
