// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run sequencers back to back, each starting the instant the previous one completes.
//!
//! ## Usage
//!
//! 1) Queue stage factories with [`SequenceChain::then`]. A factory receives the
//!    start instant of its stage and returns the started sequencer.
//! 2) Call [`SequenceChain::start`] to start the first stage.
//! 3) Drive the chain with [`Sequencer::advance`] like any other sequencer, and
//!    inspect [`SequenceChain::active`] to render the current stage.
//!
//! Stages are chained on their scheduled completion instant rather than on the
//! `now` of the advance call that observed it, so one large clock jump plays
//! out exactly like a steady stream of small ones.
//!
//! ## Minimal example
//!
//! ```
//! use zerozero_sequence::{
//!     DismissConfig, SequenceChain, Sequencer, Stage, Status, TimedDismissSequencer,
//! };
//!
//! let mut onboarding = SequenceChain::<Stage>::new()
//!     .then(|at| TimedDismissSequencer::start(DismissConfig::new(100, 50), at).into())
//!     .then(|at| TimedDismissSequencer::start(DismissConfig::new(200, 0), at).into())
//!     .start(0);
//!
//! assert_eq!(onboarding.active_index(), Some(0));
//! assert_eq!(onboarding.advance(1_000), Status::Complete);
//! assert_eq!(onboarding.completed_at(), Some(350));
//! ```

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use core::fmt;

use tracing::debug;

use crate::{
    Completion, Sequencer, Status, TimedDismissSequencer, TypingSequencer,
    WordRevealSequencer,
};

/// Builds a started stage from its start instant.
pub type StageFactory<S> = Box<dyn FnOnce(u64) -> S>;

/// The stage kinds an onboarding flow is made of.
///
/// Hosts match on [`SequenceChain::active`] to pick a renderer per stage.
#[derive(Debug)]
pub enum Stage {
    /// Per-character typing of a list of lines.
    Typing(TypingSequencer),
    /// Word-by-word reveal of a text block.
    WordReveal(WordRevealSequencer),
    /// Static visual shown for a fixed time, then faded out.
    Dismiss(TimedDismissSequencer),
}

impl From<TypingSequencer> for Stage {
    fn from(sequencer: TypingSequencer) -> Self {
        Self::Typing(sequencer)
    }
}

impl From<WordRevealSequencer> for Stage {
    fn from(sequencer: WordRevealSequencer) -> Self {
        Self::WordReveal(sequencer)
    }
}

impl From<TimedDismissSequencer> for Stage {
    fn from(sequencer: TimedDismissSequencer) -> Self {
        Self::Dismiss(sequencer)
    }
}

impl Stage {
    fn as_sequencer(&self) -> &dyn Sequencer {
        match self {
            Self::Typing(s) => s,
            Self::WordReveal(s) => s,
            Self::Dismiss(s) => s,
        }
    }

    fn as_sequencer_mut(&mut self) -> &mut dyn Sequencer {
        match self {
            Self::Typing(s) => s,
            Self::WordReveal(s) => s,
            Self::Dismiss(s) => s,
        }
    }

    /// Opacity of the stage's content at `now`.
    ///
    /// Typing has no fade of its own: it is fully opaque until it finishes.
    #[must_use]
    pub fn opacity(&self, now: u64) -> f64 {
        match self {
            Self::Typing(s) => {
                if s.status() == Status::Running {
                    1.0
                } else {
                    0.0
                }
            }
            Self::WordReveal(s) => s.opacity(now),
            Self::Dismiss(s) => s.opacity(now),
        }
    }
}

impl Sequencer for Stage {
    fn advance(&mut self, now: u64) -> Status {
        self.as_sequencer_mut().advance(now)
    }

    fn status(&self) -> Status {
        self.as_sequencer().status()
    }

    fn next_deadline(&self) -> Option<u64> {
        self.as_sequencer().next_deadline()
    }

    fn completed_at(&self) -> Option<u64> {
        self.as_sequencer().completed_at()
    }

    fn dispose(&mut self) {
        self.as_sequencer_mut().dispose();
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ChainPhase {
    /// Not started yet; stages are still being queued.
    Idle,
    /// Stage `index` is active (or, past the last stage, about to complete at `since`).
    Running { index: usize, since: u64 },
    Complete,
    Disposed,
}

/// Runs stages one after another and signals completion after the last.
pub struct SequenceChain<S = Box<dyn Sequencer>> {
    pending: VecDeque<StageFactory<S>>,
    active: Option<S>,
    phase: ChainPhase,
    completion: Completion,
    completed_at: Option<u64>,
}

impl<S: fmt::Debug> fmt::Debug for SequenceChain<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceChain")
            .field("pending", &self.pending.len())
            .field("active", &self.active)
            .field("phase", &self.phase)
            .field("completion", &self.completion)
            .field("completed_at", &self.completed_at)
            .finish()
    }
}

impl<S: Sequencer> Default for SequenceChain<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sequencer> SequenceChain<S> {
    /// Creates a chain with no stages.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            active: None,
            phase: ChainPhase::Idle,
            completion: Completion::default(),
            completed_at: None,
        }
    }

    /// Queues a stage.
    #[must_use]
    pub fn then(mut self, factory: impl FnOnce(u64) -> S + 'static) -> Self {
        self.pending.push_back(Box::new(factory));
        self
    }

    /// Installs the callback fired once after the last stage completes.
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

    /// Starts the first stage at `now`.
    ///
    /// A chain without stages completes on its first advance, at `now`.
    #[must_use]
    pub fn start(mut self, now: u64) -> Self {
        debug!(stages = self.pending.len(), now, "chain started");
        self.phase = ChainPhase::Running {
            index: 0,
            since: now,
        };
        self.active = self.pending.pop_front().map(|factory| factory(now));
        self
    }

    /// The stage currently running.
    #[must_use]
    pub fn active(&self) -> Option<&S> {
        self.active.as_ref()
    }

    /// Index of the stage currently running.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        match self.phase {
            ChainPhase::Running { index, .. } if self.active.is_some() => Some(index),
            _ => None,
        }
    }

    /// Number of stages not started yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    fn start_next(&mut self, index: usize, at: u64) {
        self.active = self.pending.pop_front().map(|factory| factory(at));
        self.phase = ChainPhase::Running { index, since: at };
        if self.active.is_some() {
            debug!(stage = index, at, "chain stage started");
        }
    }

    fn finish(&mut self, at: u64) {
        self.phase = ChainPhase::Complete;
        self.completed_at = Some(at);
        debug!(at, "chain complete");
        self.completion.fire();
    }
}

impl<S: Sequencer> Sequencer for SequenceChain<S> {
    fn advance(&mut self, now: u64) -> Status {
        loop {
            let ChainPhase::Running { index, since } = self.phase else {
                return self.status();
            };
            let Some(active) = self.active.as_mut() else {
                if since <= now {
                    self.finish(since);
                }
                return self.status();
            };
            match active.advance(now) {
                Status::Running => return Status::Running,
                Status::Complete => {
                    let at = active.completed_at().unwrap_or(now);
                    self.start_next(index + 1, at);
                }
                // A stage disposed from outside counts as finished at `now`.
                Status::Disposed => self.start_next(index + 1, now),
            }
        }
    }

    fn status(&self) -> Status {
        match self.phase {
            ChainPhase::Idle | ChainPhase::Running { .. } => Status::Running,
            ChainPhase::Complete => Status::Complete,
            ChainPhase::Disposed => Status::Disposed,
        }
    }

    fn next_deadline(&self) -> Option<u64> {
        match (self.phase, &self.active) {
            (ChainPhase::Running { .. }, Some(active)) => active.next_deadline(),
            (ChainPhase::Running { since, .. }, None) => Some(since),
            _ => None,
        }
    }

    fn completed_at(&self) -> Option<u64> {
        self.completed_at
    }

    fn dispose(&mut self) {
        if self.status().is_finished() {
            return;
        }
        if let Some(active) = self.active.as_mut() {
            active.dispose();
        }
        self.active = None;
        self.pending.clear();
        self.completion.disarm();
        self.phase = ChainPhase::Disposed;
        debug!("chain disposed");
    }
}
