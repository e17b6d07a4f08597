// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned timer queue.

use alloc::vec::Vec;

/// Handle to a timer scheduled on a [`TimerQueue`].
///
/// Handles are unique per queue and never reused, so cancelling a handle whose
/// timer already fired is a harmless no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer popped from the queue because its deadline was reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired<T> {
    /// Handle the timer was scheduled under.
    pub id: TimerId,
    /// The instant the timer was due, which may be earlier than the `now` it
    /// was popped at.
    ///
    /// Follow-up timers should be scheduled relative to this value so that a
    /// large clock jump replays the same schedule a steady tick would.
    pub deadline: u64,
    /// Caller payload.
    pub payload: T,
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: u64,
    payload: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (u64, TimerId) {
        (self.deadline, self.id)
    }
}

/// A queue of pending timers, each carrying a payload of type `T`.
///
/// Entries are kept sorted with the earliest `(deadline, id)` at the end of
/// the backing vector, so popping the next due timer is O(1) and scheduling
/// is a binary search plus insert. Queues owned by UI state machines stay
/// small (a handful of entries), which is where this layout does well.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedules `payload` to expire at the absolute instant `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let key = (deadline, id);
        // Descending order: everything with a larger key stays in front.
        let at = self.entries.partition_point(|e| e.key() > key);
        self.entries.insert(
            at,
            Entry {
                id,
                deadline,
                payload,
            },
        );
        id
    }

    /// Schedules `payload` to expire `delay_ms` after `now`.
    ///
    /// A zero delay is due immediately. The deadline saturates at `u64::MAX`.
    pub fn schedule_after(&mut self, now: u64, delay_ms: u64, payload: T) -> TimerId {
        self.schedule(now.saturating_add(delay_ms), payload)
    }

    /// Cancels a pending timer, returning its payload if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let at = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(at).payload)
    }

    /// Cancels every pending timer and returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    /// Pops the earliest timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<Expired<T>> {
        if self.entries.last()?.deadline > now {
            return None;
        }
        self.entries.pop().map(|e| Expired {
            id: e.id,
            deadline: e.deadline,
            payload: e.payload,
        })
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.last().map(|e| e.deadline)
    }

    /// Returns `true` if the timer is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
