// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A virtual monotonic clock measured in milliseconds.
///
/// Nothing advances it except the caller, which makes timer-driven state
/// machines testable without real wall-clock delays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    /// Creates a clock reading `start` milliseconds.
    #[must_use]
    pub fn new(start: u64) -> Self {
        Self { now: start }
    }

    /// Current reading in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Moves the clock forward by `delta_ms` and returns the new reading.
    ///
    /// Saturates at `u64::MAX`.
    pub fn advance(&mut self, delta_ms: u64) -> u64 {
        self.now = self.now.saturating_add(delta_ms);
        self.now
    }

    /// Moves the clock to `at_ms` if that is not in the past.
    ///
    /// Returns the reading after the call; the clock never goes backwards.
    pub fn set(&mut self, at_ms: u64) -> u64 {
        self.now = self.now.max(at_ms);
        self.now
    }
}
