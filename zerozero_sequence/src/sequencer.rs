// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

/// Coarse lifecycle of a sequencer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Timers are still pending.
    Running,
    /// The terminal state was reached and the completion callback has fired.
    Complete,
    /// The owner disposed the sequencer; nothing will ever fire again.
    Disposed,
}

impl Status {
    /// Returns `true` for [`Status::Complete`] and [`Status::Disposed`].
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// A self-contained timed state machine that signals completion once.
///
/// Implementations own their timers. The host calls [`advance`](Self::advance)
/// with the current time whenever it wakes up (on every animation frame, or at
/// [`next_deadline`](Self::next_deadline)); every transition due at or before
/// that time is applied in order.
pub trait Sequencer {
    /// Applies every transition due at or before `now` and returns the status.
    fn advance(&mut self, now: u64) -> Status;

    /// Current status, without advancing.
    fn status(&self) -> Status;

    /// The instant of the next pending transition, if any.
    fn next_deadline(&self) -> Option<u64>;

    /// The instant the terminal state was reached, once complete.
    ///
    /// This is the scheduled deadline, not the `now` passed to the
    /// [`advance`](Self::advance) call that observed it.
    fn completed_at(&self) -> Option<u64>;

    /// Cancels every pending timer and drops the completion callback.
    ///
    /// Disposing a finished sequencer is a no-op.
    fn dispose(&mut self);
}

impl<S: Sequencer + ?Sized> Sequencer for Box<S> {
    fn advance(&mut self, now: u64) -> Status {
        (**self).advance(now)
    }

    fn status(&self) -> Status {
        (**self).status()
    }

    fn next_deadline(&self) -> Option<u64> {
        (**self).next_deadline()
    }

    fn completed_at(&self) -> Option<u64> {
        (**self).completed_at()
    }

    fn dispose(&mut self) {
        (**self).dispose();
    }
}

/// A completion callback that can run at most once.
///
/// Firing takes the callback out, so a second [`fire`](Self::fire) finds
/// nothing to call.
#[derive(Default)]
pub struct Completion(Option<Box<dyn FnOnce()>>);

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Completion").field(&self.is_armed()).finish()
    }
}

impl Completion {
    /// Wraps `callback`.
    #[must_use]
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(callback)))
    }

    /// Returns `true` if a callback is waiting to fire.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }

    /// Runs the callback if it has not run yet. Returns whether it ran.
    pub fn fire(&mut self) -> bool {
        match self.0.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Drops the callback without running it.
    pub fn disarm(&mut self) {
        self.0 = None;
    }
}
