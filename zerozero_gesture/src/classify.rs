// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap vs. swipe classification over a start/end point pair.
//!
//! ## Rules
//!
//! With `delta = end - start`:
//!
//! 1) If both `|delta.x|` and `|delta.y|` are below the threshold, the gesture is a [`GestureResult::Tap`].
//! 2) Otherwise the axis with the larger magnitude wins. Equal magnitudes resolve to the horizontal axis.
//! 3) The sign on the winning axis picks the direction: `x > 0` is right, `y > 0` is down
//!    (viewport coordinates grow downwards). Anything else is left or up.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use zerozero_gesture::{classify, GestureResult, SwipeDirection, DEFAULT_SWIPE_THRESHOLD};
//!
//! let start = Point::new(200.0, 300.0);
//!
//! // A short jitter is a tap.
//! let tap = classify(start, Point::new(210.0, 290.0), DEFAULT_SWIPE_THRESHOLD);
//! assert_eq!(tap, GestureResult::Tap);
//!
//! // A long drag to the left is a swipe.
//! let swipe = classify(start, Point::new(80.0, 320.0), DEFAULT_SWIPE_THRESHOLD);
//! assert_eq!(swipe.direction(), Some(SwipeDirection::Left));
//! ```

use kurbo::{Point, Vec2};

/// Minimum travel, in viewport units, for a gesture to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// The input device family a gesture came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Touch screen contact.
    Touch,
    /// Mouse, pen or other pointer device.
    Pointer,
}

/// Direction of a swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Towards negative x.
    Left,
    /// Towards positive x.
    Right,
    /// Towards negative y.
    Up,
    /// Towards positive y.
    Down,
}

impl SwipeDirection {
    /// Returns `true` for [`Left`](Self::Left) and [`Right`](Self::Right).
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Lowercase name, handy for logs and host bindings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Outcome of classifying one press-to-release interaction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureResult {
    /// The pointer stayed within the threshold on both axes.
    Tap,
    /// The pointer travelled at least the threshold along one axis.
    Swipe {
        /// Dominant direction of travel.
        direction: SwipeDirection,
        /// Total travel, `end - start`.
        delta: Vec2,
    },
}

impl GestureResult {
    /// Swipe direction, or `None` for a tap.
    #[must_use]
    pub fn direction(&self) -> Option<SwipeDirection> {
        match self {
            Self::Tap => None,
            Self::Swipe { direction, .. } => Some(*direction),
        }
    }

    /// Returns `true` for [`GestureResult::Tap`].
    #[must_use]
    pub fn is_tap(&self) -> bool {
        matches!(self, Self::Tap)
    }
}

/// A completed press-to-release interaction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureEvent {
    /// Where the press happened.
    pub start: Point,
    /// Where the release happened.
    pub end: Point,
    /// Device family that produced the press and release.
    pub kind: InputKind,
}

impl GestureEvent {
    /// Total travel from press to release.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    /// Classifies this interaction. See [`classify`].
    #[must_use]
    pub fn classify(&self, threshold: f64) -> GestureResult {
        classify(self.start, self.end, threshold)
    }
}

/// Classifies the travel from `start` to `end` as a tap or a swipe.
///
/// Both magnitudes below `threshold` give a tap. Otherwise the larger
/// magnitude picks the axis, with ties going to the horizontal axis, and the
/// sign on that axis picks the direction.
#[must_use]
pub fn classify(start: Point, end: Point, threshold: f64) -> GestureResult {
    let delta = end - start;
    let (abs_x, abs_y) = (delta.x.abs(), delta.y.abs());

    if abs_x < threshold && abs_y < threshold {
        return GestureResult::Tap;
    }

    let direction = if abs_x >= abs_y {
        if delta.x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    } else if delta.y > 0.0 {
        SwipeDirection::Down
    } else {
        SwipeDirection::Up
    };

    GestureResult::Swipe { direction, delta }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point = Point::new(100.0, 100.0);

    fn swipe_dir(dx: f64, dy: f64) -> Option<SwipeDirection> {
        classify(ORIGIN, ORIGIN + Vec2::new(dx, dy), DEFAULT_SWIPE_THRESHOLD).direction()
    }

    #[test]
    fn no_travel_is_tap() {
        assert_eq!(classify(ORIGIN, ORIGIN, 50.0), GestureResult::Tap);
    }

    #[test]
    fn travel_just_below_threshold_is_tap() {
        assert_eq!(swipe_dir(49.9, -49.9), None);
        assert_eq!(swipe_dir(-49.0, 0.0), None);
    }

    #[test]
    fn travel_at_threshold_is_swipe() {
        assert_eq!(swipe_dir(50.0, 0.0), Some(SwipeDirection::Right));
        assert_eq!(swipe_dir(0.0, -50.0), Some(SwipeDirection::Up));
    }

    #[test]
    fn horizontal_directions() {
        assert_eq!(swipe_dir(120.0, 30.0), Some(SwipeDirection::Right));
        assert_eq!(swipe_dir(-120.0, 30.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn vertical_directions() {
        assert_eq!(swipe_dir(10.0, 90.0), Some(SwipeDirection::Down));
        assert_eq!(swipe_dir(-10.0, -90.0), Some(SwipeDirection::Up));
    }

    #[test]
    fn larger_axis_wins_even_when_both_exceed_threshold() {
        assert_eq!(swipe_dir(60.0, 70.0), Some(SwipeDirection::Down));
        assert_eq!(swipe_dir(-80.0, 70.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn vertical_swipe_with_short_horizontal_travel() {
        assert_eq!(swipe_dir(5.0, -55.0), Some(SwipeDirection::Up));
    }

    #[test]
    fn ties_resolve_horizontally() {
        assert_eq!(swipe_dir(75.0, 75.0), Some(SwipeDirection::Right));
        assert_eq!(swipe_dir(-75.0, 75.0), Some(SwipeDirection::Left));
        assert_eq!(swipe_dir(-50.0, -50.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn swipe_carries_full_delta() {
        let result = classify(
            Point::new(10.0, 20.0),
            Point::new(-90.0, 35.0),
            DEFAULT_SWIPE_THRESHOLD,
        );
        assert_eq!(
            result,
            GestureResult::Swipe {
                direction: SwipeDirection::Left,
                delta: Vec2::new(-100.0, 15.0),
            }
        );
    }

    #[test]
    fn custom_threshold() {
        let end = ORIGIN + Vec2::new(20.0, 0.0);
        assert!(classify(ORIGIN, end, 50.0).is_tap());
        assert_eq!(
            classify(ORIGIN, end, 15.0).direction(),
            Some(SwipeDirection::Right)
        );
    }

    #[test]
    fn event_classify_matches_free_function() {
        let event = GestureEvent {
            start: ORIGIN,
            end: ORIGIN + Vec2::new(0.0, 64.0),
            kind: InputKind::Touch,
        };
        assert_eq!(event.delta(), Vec2::new(0.0, 64.0));
        assert_eq!(
            event.classify(DEFAULT_SWIPE_THRESHOLD),
            classify(event.start, event.end, DEFAULT_SWIPE_THRESHOLD)
        );
    }

    #[test]
    fn direction_names() {
        assert_eq!(SwipeDirection::Left.as_str(), "left");
        assert_eq!(SwipeDirection::Down.as_str(), "down");
        assert!(SwipeDirection::Right.is_horizontal());
        assert!(!SwipeDirection::Up.is_horizontal());
    }
}
