// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-character typing reveal of a list of lines, with a blinking caret.
//!
//! ## Timeline
//!
//! For each line: one more character every `typing_speed_ms`, then a pause of
//! `message_delay_ms` once the line is fully typed. After the last line's
//! pause comes one more `message_delay_ms` (the finishing pause), after which
//! the sequencer completes and fires its callback.
//!
//! The caret toggles every [`CARET_BLINK_INTERVAL_MS`] while a line is being
//! typed, starting visible. It is hidden while pausing and once finished.
//!
//! ## Minimal example
//!
//! ```
//! use zerozero_sequence::{Sequencer, Status, TypingConfig, TypingSequencer};
//!
//! let config = TypingConfig {
//!     typing_speed_ms: 10,
//!     message_delay_ms: 20,
//!     ..TypingConfig::new(["hi", "ok"])
//! };
//! let mut typing = TypingSequencer::start(config, 0);
//!
//! typing.advance(10);
//! assert_eq!(typing.current_text(), "h");
//!
//! typing.advance(40);
//! assert_eq!(typing.revealed_lines().collect::<Vec<_>>(), ["hi", ""]);
//!
//! // "ok" is typed by 60, its pause ends at 80, the finishing pause at 100.
//! assert_eq!(typing.advance(99), Status::Running);
//! assert_eq!(typing.advance(100), Status::Complete);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};
use zerozero_timing::{TimerId, TimerQueue};

use crate::{Completion, Sequencer, Status};

/// Default delay between successive characters.
pub const DEFAULT_TYPING_SPEED_MS: u64 = 50;
/// Default pause after a fully typed line.
pub const DEFAULT_MESSAGE_DELAY_MS: u64 = 600;
/// Caret blink half-period.
pub const CARET_BLINK_INTERVAL_MS: u64 = 500;

/// Configuration for a [`TypingSequencer`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TypingConfig {
    /// Lines to type, in order.
    pub messages: Vec<String>,
    /// Delay between successive characters.
    pub typing_speed_ms: u64,
    /// Pause after each fully typed line, and once more before completing.
    pub message_delay_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            message_delay_ms: DEFAULT_MESSAGE_DELAY_MS,
        }
    }
}

impl TypingConfig {
    /// Default timings for the given lines.
    #[must_use]
    pub fn new<I>(messages: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Where a [`TypingSequencer`] is in its timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypingPhase {
    /// `chars` characters of line `line` are visible; more are coming.
    Typing {
        /// Index of the line being typed.
        line: usize,
        /// Characters of that line revealed so far.
        chars: usize,
    },
    /// Line `line` is fully typed; waiting before the next one.
    Pausing {
        /// Index of the fully typed line.
        line: usize,
    },
    /// Every line is typed; waiting before signalling completion.
    Finishing,
    /// Terminal: the completion callback has fired.
    Complete,
    /// Terminal: disposed by the owner before completing.
    Disposed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tick {
    Char,
    EndPause,
    Finish,
    Caret,
}

/// Reveals lines of text one character at a time.
#[derive(Debug)]
pub struct TypingSequencer {
    config: TypingConfig,
    phase: TypingPhase,
    caret_visible: bool,
    caret_timer: Option<TimerId>,
    timers: TimerQueue<Tick>,
    completion: Completion,
    completed_at: Option<u64>,
}

impl TypingSequencer {
    /// Starts typing the first line at `now`.
    #[must_use]
    pub fn start(config: TypingConfig, now: u64) -> Self {
        let mut this = Self {
            config,
            phase: TypingPhase::Finishing,
            caret_visible: false,
            caret_timer: None,
            timers: TimerQueue::new(),
            completion: Completion::default(),
            completed_at: None,
        };
        debug!(lines = this.config.messages.len(), now, "typing started");
        if this.config.messages.is_empty() {
            this.enter_finishing(now);
        } else {
            this.enter_typing(0, now);
        }
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
    pub fn config(&self) -> &TypingConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Index of the line in progress; equals the line count once every line
    /// has been typed.
    ///
    /// A disposed sequencer reports 0, matching [`revealed_lines`](Self::revealed_lines).
    #[must_use]
    pub fn current_index(&self) -> usize {
        match self.phase {
            TypingPhase::Typing { line, .. } | TypingPhase::Pausing { line } => line,
            TypingPhase::Finishing | TypingPhase::Complete => self.config.messages.len(),
            TypingPhase::Disposed => 0,
        }
    }

    /// Visible prefix of the line in progress.
    ///
    /// Empty once every line has been typed.
    #[must_use]
    pub fn current_text(&self) -> &str {
        match self.phase {
            TypingPhase::Typing { line, chars } => char_prefix(&self.config.messages[line], chars),
            TypingPhase::Pausing { line } => self.config.messages[line].as_str(),
            TypingPhase::Finishing | TypingPhase::Complete | TypingPhase::Disposed => "",
        }
    }

    /// Every line revealed so far: finished lines in full, then the visible
    /// prefix of the line being typed.
    ///
    /// A disposed sequencer reveals nothing.
    pub fn revealed_lines(&self) -> impl Iterator<Item = &str> + '_ {
        let (full, partial) = match self.phase {
            TypingPhase::Typing { line, chars } => (
                line,
                Some(char_prefix(&self.config.messages[line], chars)),
            ),
            TypingPhase::Pausing { line } => (line + 1, None),
            TypingPhase::Finishing | TypingPhase::Complete => (self.config.messages.len(), None),
            TypingPhase::Disposed => (0, None),
        };
        self.config.messages[..full]
            .iter()
            .map(String::as_str)
            .chain(partial)
    }

    /// Whether the caret should be drawn right now.
    #[must_use]
    pub fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    fn line_len(&self, line: usize) -> usize {
        self.config.messages[line].chars().count()
    }

    fn enter_typing(&mut self, line: usize, at: u64) {
        trace!(line, at, "typing line");
        self.phase = TypingPhase::Typing { line, chars: 0 };
        if self.line_len(line) == 0 {
            self.enter_pausing(line, at);
            return;
        }
        self.timers
            .schedule_after(at, self.config.typing_speed_ms, Tick::Char);
        self.caret_visible = true;
        self.caret_timer = Some(
            self.timers
                .schedule_after(at, CARET_BLINK_INTERVAL_MS, Tick::Caret),
        );
    }

    fn enter_pausing(&mut self, line: usize, at: u64) {
        trace!(line, at, "line typed");
        self.phase = TypingPhase::Pausing { line };
        self.stop_caret();
        self.timers
            .schedule_after(at, self.config.message_delay_ms, Tick::EndPause);
    }

    fn enter_finishing(&mut self, at: u64) {
        trace!(at, "all lines typed");
        self.phase = TypingPhase::Finishing;
        self.stop_caret();
        self.timers
            .schedule_after(at, self.config.message_delay_ms, Tick::Finish);
    }

    fn stop_caret(&mut self) {
        if let Some(id) = self.caret_timer.take() {
            self.timers.cancel(id);
        }
        self.caret_visible = false;
    }

    fn on_tick(&mut self, tick: Tick, at: u64) {
        match (tick, self.phase) {
            (Tick::Char, TypingPhase::Typing { line, chars }) => {
                let chars = chars + 1;
                self.phase = TypingPhase::Typing { line, chars };
                if chars >= self.line_len(line) {
                    self.enter_pausing(line, at);
                } else {
                    self.timers
                        .schedule_after(at, self.config.typing_speed_ms, Tick::Char);
                }
            }
            (Tick::Caret, TypingPhase::Typing { .. }) => {
                self.caret_visible = !self.caret_visible;
                self.caret_timer = Some(
                    self.timers
                        .schedule_after(at, CARET_BLINK_INTERVAL_MS, Tick::Caret),
                );
            }
            (Tick::EndPause, TypingPhase::Pausing { line }) => {
                if line + 1 < self.config.messages.len() {
                    self.enter_typing(line + 1, at);
                } else {
                    self.enter_finishing(at);
                }
            }
            (Tick::Finish, TypingPhase::Finishing) => {
                self.phase = TypingPhase::Complete;
                self.completed_at = Some(at);
                self.timers.clear();
                debug!(at, "typing complete");
                self.completion.fire();
            }
            // Timers are cancelled on every phase exit, so nothing else can be due.
            (tick, phase) => trace!(?tick, ?phase, "ignoring stale tick"),
        }
    }
}

impl Sequencer for TypingSequencer {
    fn advance(&mut self, now: u64) -> Status {
        while let Some(due) = self.timers.pop_due(now) {
            self.on_tick(due.payload, due.deadline);
        }
        self.status()
    }

    fn status(&self) -> Status {
        match self.phase {
            TypingPhase::Complete => Status::Complete,
            TypingPhase::Disposed => Status::Disposed,
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
        self.caret_timer = None;
        self.caret_visible = false;
        self.completion.disarm();
        self.phase = TypingPhase::Disposed;
        debug!(dropped, "typing disposed");
    }
}

/// The first `chars` characters of `text`, cut on a char boundary.
fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
