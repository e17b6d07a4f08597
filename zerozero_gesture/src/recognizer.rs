// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture recognizer: press tracking, classification and caller hooks in one place.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Vec2};
use tracing::trace;

use crate::{DEFAULT_SWIPE_THRESHOLD, GestureEvent, GestureResult, GestureState, InputKind};

type SwipeHook<'a> = Box<dyn FnMut(GestureResult) + 'a>;
type TapHook<'a> = Box<dyn FnMut(&GestureEvent) + 'a>;

/// Turns raw press/move/release input into taps and swipes.
///
/// Hooks are supplied at construction. The host stays responsible for
/// registering input listeners and suppressing default scroll behaviour while
/// [`is_tracking`](Self::is_tracking) is `true`.
///
/// ```
/// use std::cell::RefCell;
///
/// use kurbo::Point;
/// use zerozero_gesture::{GestureRecognizer, InputKind, SwipeDirection};
///
/// let swipes = RefCell::new(Vec::new());
/// let mut recognizer = GestureRecognizer::new()
///     .on_swipe(|result| swipes.borrow_mut().extend(result.direction()));
///
/// recognizer.pointer_down(InputKind::Touch, Point::new(300.0, 100.0));
/// recognizer.pointer_up(InputKind::Touch, Point::new(120.0, 110.0));
/// drop(recognizer);
///
/// assert_eq!(swipes.into_inner(), [SwipeDirection::Left]);
/// ```
pub struct GestureRecognizer<'a> {
    threshold: f64,
    state: GestureState,
    on_swipe: Option<SwipeHook<'a>>,
    on_tap: Option<TapHook<'a>>,
}

impl fmt::Debug for GestureRecognizer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureRecognizer")
            .field("threshold", &self.threshold)
            .field("state", &self.state)
            .field("on_swipe", &self.on_swipe.is_some())
            .field("on_tap", &self.on_tap.is_some())
            .finish()
    }
}

impl Default for GestureRecognizer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GestureRecognizer<'a> {
    /// Creates a recognizer with [`DEFAULT_SWIPE_THRESHOLD`] and no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_SWIPE_THRESHOLD,
            state: GestureState::default(),
            on_swipe: None,
            on_tap: None,
        }
    }

    /// Sets the swipe threshold in viewport units.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Installs the hook called with every recognized swipe.
    #[must_use]
    pub fn on_swipe(mut self, hook: impl FnMut(GestureResult) + 'a) -> Self {
        self.on_swipe = Some(Box::new(hook));
        self
    }

    /// Installs the hook called with the raw event of every recognized tap.
    #[must_use]
    pub fn on_tap(mut self, hook: impl FnMut(&GestureEvent) + 'a) -> Self {
        self.on_tap = Some(Box::new(hook));
        self
    }

    /// Swipe threshold in viewport units.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state.is_tracking()
    }

    /// Handles a press.
    pub fn pointer_down(&mut self, kind: InputKind, pos: Point) {
        self.state.on_down(kind, pos);
    }

    /// Handles a move, returning the delta since the previous position.
    pub fn pointer_move(&mut self, kind: InputKind, pos: Point) -> Option<Vec2> {
        self.state.on_move(kind, pos)
    }

    /// Handles a release: classifies the gesture and invokes the matching hook.
    ///
    /// Returns `None` if no press of the same input kind was being tracked.
    pub fn pointer_up(&mut self, kind: InputKind, pos: Point) -> Option<GestureResult> {
        let event = self.state.on_up(kind, pos)?;
        let result = event.classify(self.threshold);
        match result {
            GestureResult::Tap => {
                trace!(kind = ?event.kind, "tap");
                if let Some(hook) = self.on_tap.as_mut() {
                    hook(&event);
                }
            }
            GestureResult::Swipe { direction, delta } => {
                trace!(
                    direction = direction.as_str(),
                    dx = delta.x,
                    dy = delta.y,
                    "swipe"
                );
                if let Some(hook) = self.on_swipe.as_mut() {
                    hook(result);
                }
            }
        }
        Some(result)
    }

    /// Abandons the press in flight without classifying it.
    pub fn cancel(&mut self) {
        self.state.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SwipeDirection;
    use core::cell::Cell;

    #[test]
    fn tap_invokes_only_tap_hook() {
        let taps = Cell::new(0);
        let swipes = Cell::new(0);
        let mut recognizer = GestureRecognizer::new()
            .on_tap(|_| taps.set(taps.get() + 1))
            .on_swipe(|_| swipes.set(swipes.get() + 1));

        recognizer.pointer_down(InputKind::Pointer, Point::new(10.0, 10.0));
        let result = recognizer.pointer_up(InputKind::Pointer, Point::new(12.0, 14.0));
        drop(recognizer);

        assert_eq!(result, Some(GestureResult::Tap));
        assert_eq!(taps.get(), 1);
        assert_eq!(swipes.get(), 0);
    }

    #[test]
    fn swipe_hook_receives_result() {
        let seen = Cell::new(None);
        let mut recognizer =
            GestureRecognizer::new().on_swipe(|result| seen.set(result.direction()));

        recognizer.pointer_down(InputKind::Touch, Point::new(0.0, 200.0));
        recognizer.pointer_move(InputKind::Touch, Point::new(0.0, 150.0));
        recognizer.pointer_up(InputKind::Touch, Point::new(4.0, 60.0));
        drop(recognizer);

        assert_eq!(seen.get(), Some(SwipeDirection::Up));
    }

    #[test]
    fn release_without_press_does_nothing() {
        let taps = Cell::new(0);
        let mut recognizer = GestureRecognizer::new().on_tap(|_| taps.set(taps.get() + 1));

        assert_eq!(recognizer.pointer_up(InputKind::Pointer, Point::ZERO), None);
        drop(recognizer);
        assert_eq!(taps.get(), 0);
    }

    #[test]
    fn cancel_suppresses_classification() {
        let mut recognizer = GestureRecognizer::new();
        recognizer.pointer_down(InputKind::Touch, Point::ZERO);
        assert!(recognizer.is_tracking());

        recognizer.cancel();

        assert!(!recognizer.is_tracking());
        assert_eq!(
            recognizer.pointer_up(InputKind::Touch, Point::new(200.0, 0.0)),
            None
        );
    }

    #[test]
    fn custom_threshold_applies() {
        let mut recognizer = GestureRecognizer::new().with_threshold(10.0);
        assert_eq!(recognizer.threshold(), 10.0);

        recognizer.pointer_down(InputKind::Pointer, Point::ZERO);
        let result = recognizer.pointer_up(InputKind::Pointer, Point::new(12.0, 0.0));
        assert_eq!(
            result.and_then(|r| r.direction()),
            Some(SwipeDirection::Right)
        );
    }

    #[test]
    fn works_without_hooks() {
        let mut recognizer = GestureRecognizer::default();
        recognizer.pointer_down(InputKind::Pointer, Point::ZERO);
        assert!(
            recognizer
                .pointer_up(InputKind::Pointer, Point::new(0.0, 80.0))
                .is_some()
        );
    }
}
