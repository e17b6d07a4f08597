// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Show a static visual for a fixed time, fade it out, then notify.
//!
//! This is the shared state machine behind the glitch intro and the
//! single-word display: each call site picks its own display and fade lengths.
//!
//! ```
//! use zerozero_sequence::{DismissConfig, DismissPhase, Sequencer, TimedDismissSequencer};
//!
//! let mut intro = TimedDismissSequencer::start(DismissConfig::new(100, 50), 0);
//!
//! intro.advance(100);
//! assert_eq!(intro.phase(), DismissPhase::FadingOut { since: 100 });
//! assert_eq!(intro.opacity(125), 0.5);
//!
//! intro.advance(150);
//! assert_eq!(intro.phase(), DismissPhase::Dismissed);
//! ```

use tracing::{debug, trace};
use zerozero_timing::TimerQueue;

use crate::{Completion, Sequencer, Status};

/// Configuration for a [`TimedDismissSequencer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DismissConfig {
    /// How long the visual stays fully visible.
    pub display_duration_ms: u64,
    /// How long the fade-out lasts.
    pub fade_out_duration_ms: u64,
}

impl DismissConfig {
    /// Creates a configuration from both durations.
    #[must_use]
    pub const fn new(display_duration_ms: u64, fade_out_duration_ms: u64) -> Self {
        Self {
            display_duration_ms,
            fade_out_duration_ms,
        }
    }

    /// Total time from start to dismissal.
    #[must_use]
    pub const fn total_ms(&self) -> u64 {
        self.display_duration_ms
            .saturating_add(self.fade_out_duration_ms)
    }
}

/// Where a [`TimedDismissSequencer`] is in its timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DismissPhase {
    /// Fully visible.
    Visible,
    /// Fading out since `since`.
    FadingOut {
        /// Start of the fade.
        since: u64,
    },
    /// Terminal: the completion callback has fired.
    Dismissed,
    /// Terminal: disposed by the owner before completing.
    Disposed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tick {
    FadeOut,
    Dismiss,
}

/// Shows something for a fixed time, fades it out and signals completion.
#[derive(Debug)]
pub struct TimedDismissSequencer {
    config: DismissConfig,
    phase: DismissPhase,
    timers: TimerQueue<Tick>,
    completion: Completion,
    completed_at: Option<u64>,
}

impl TimedDismissSequencer {
    /// Starts the display at `now`.
    #[must_use]
    pub fn start(config: DismissConfig, now: u64) -> Self {
        let mut timers = TimerQueue::new();
        timers.schedule_after(now, config.display_duration_ms, Tick::FadeOut);
        debug!(
            display_ms = config.display_duration_ms,
            fade_ms = config.fade_out_duration_ms,
            now,
            "timed dismiss started"
        );
        Self {
            config,
            phase: DismissPhase::Visible,
            timers,
            completion: Completion::default(),
            completed_at: None,
        }
    }

    /// Installs the callback fired once when the visual is dismissed.
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
    pub fn config(&self) -> DismissConfig {
        self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DismissPhase {
        self.phase
    }

    /// Opacity at `now`: 1.0 while visible, a linear ramp during the fade,
    /// 0.0 once dismissed or disposed.
    #[must_use]
    pub fn opacity(&self, now: u64) -> f64 {
        match self.phase {
            DismissPhase::Visible => 1.0,
            DismissPhase::FadingOut { since } => {
                1.0 - crate::progress(since, now, self.config.fade_out_duration_ms)
            }
            DismissPhase::Dismissed | DismissPhase::Disposed => 0.0,
        }
    }

    fn on_tick(&mut self, tick: Tick, at: u64) {
        match (tick, self.phase) {
            (Tick::FadeOut, DismissPhase::Visible) => {
                trace!(at, "fading out");
                self.phase = DismissPhase::FadingOut { since: at };
                self.timers
                    .schedule_after(at, self.config.fade_out_duration_ms, Tick::Dismiss);
            }
            (Tick::Dismiss, DismissPhase::FadingOut { .. }) => {
                self.phase = DismissPhase::Dismissed;
                self.completed_at = Some(at);
                self.timers.clear();
                debug!(at, "dismissed");
                self.completion.fire();
            }
            (tick, phase) => trace!(?tick, ?phase, "ignoring stale tick"),
        }
    }
}

impl Sequencer for TimedDismissSequencer {
    fn advance(&mut self, now: u64) -> Status {
        while let Some(due) = self.timers.pop_due(now) {
            self.on_tick(due.payload, due.deadline);
        }
        self.status()
    }

    fn status(&self) -> Status {
        match self.phase {
            DismissPhase::Dismissed => Status::Complete,
            DismissPhase::Disposed => Status::Disposed,
            DismissPhase::Visible | DismissPhase::FadingOut { .. } => Status::Running,
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
        self.phase = DismissPhase::Disposed;
        debug!(dropped, "timed dismiss disposed");
    }
}
