// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press/release tracking: capture the start of a gesture and hand back a [`GestureEvent`] on release.
//!
//! ## Usage
//!
//! 1) Begin tracking with [`GestureState::on_down`] when a pointer or touch goes down.
//! 2) Optionally feed moves into [`GestureState::on_move`] to get per-move deltas (e.g. for drag feedback).
//! 3) Call [`GestureState::on_up`] on release to get the completed [`GestureEvent`].
//! 4) Call [`GestureState::cancel`] when the host aborts the interaction (pointer cancel, focus loss).
//!
//! Only the input kind that started a gesture can move or finish it. Browsers
//! follow a touch with compatibility mouse events; those are ignored instead of
//! producing a second gesture.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use zerozero_gesture::{GestureState, InputKind};
//!
//! let mut state = GestureState::default();
//!
//! state.on_down(InputKind::Touch, Point::new(10.0, 20.0));
//! assert!(state.is_tracking());
//!
//! let event = state.on_up(InputKind::Touch, Point::new(90.0, 25.0)).unwrap();
//! assert_eq!(event.delta().x, 80.0);
//! assert!(!state.is_tracking());
//! ```

use kurbo::{Point, Vec2};

use crate::{GestureEvent, InputKind};

/// Tracks one in-flight press-to-release interaction.
#[derive(Debug, Clone, Default, Copy)]
pub struct GestureState {
    /// Device family and position of the press, while tracking.
    pub start: Option<(InputKind, Point)>,
    /// Last recorded position during the gesture.
    pub last_pos: Option<Point>,
}

impl GestureState {
    /// Starts tracking a new gesture, replacing any gesture already in flight.
    pub fn on_down(&mut self, kind: InputKind, pos: Point) {
        self.start = Some((kind, pos));
        self.last_pos = Some(pos);
    }

    /// Records a move, returning the delta since the previous position.
    ///
    /// Returns `None` when nothing is tracked or `kind` differs from the press.
    pub fn on_move(&mut self, kind: InputKind, pos: Point) -> Option<Vec2> {
        let (start_kind, start_pos) = self.start?;
        if start_kind != kind {
            return None;
        }
        let last = self.last_pos.unwrap_or(start_pos);
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Finishes the gesture at `pos` and returns it.
    ///
    /// Returns `None` (and keeps tracking) when `kind` differs from the press;
    /// returns `None` when nothing is tracked.
    pub fn on_up(&mut self, kind: InputKind, pos: Point) -> Option<GestureEvent> {
        let (start_kind, start_pos) = self.start?;
        if start_kind != kind {
            return None;
        }
        self.cancel();
        Some(GestureEvent {
            start: start_pos,
            end: pos,
            kind,
        })
    }

    /// Total offset from the press position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start.map(|(_, start_pos)| current_pos - start_pos)
    }

    /// Drops the gesture in flight, if any.
    pub fn cancel(&mut self) {
        self.start = None;
        self.last_pos = None;
    }

    /// Returns `true` while a gesture is in flight.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
