// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=zerozero_gesture --heading-base-level=0

//! Zerozero Gesture: tap and directional swipe recognition.
//!
//! A gesture is a single press-to-release interaction from a touch screen or
//! a pointer device. This crate turns the start and end positions of that
//! interaction into a [`GestureResult`]: either a [`GestureResult::Tap`] or a
//! [`GestureResult::Swipe`] in one of four directions.
//!
//! The crate is split into three layers, each usable on its own:
//!
//! - [`classify()`]: a pure function over a start/end point pair and a threshold.
//! - [`GestureState`]: tracks a press until its release and produces a [`GestureEvent`].
//! - [`GestureRecognizer`]: combines both and calls `on_swipe` / `on_tap` hooks.
//!
//! It does not register input listeners or suppress default scrolling; hosts
//! feed it positions in viewport units and decide what to do while a gesture
//! is being tracked.
//!
//! ## Classification
//!
//! ```rust
//! use kurbo::Point;
//! use zerozero_gesture::{classify, GestureResult, SwipeDirection};
//!
//! let start = Point::new(0.0, 0.0);
//!
//! assert_eq!(classify(start, Point::new(20.0, -30.0), 50.0), GestureResult::Tap);
//! assert_eq!(
//!     classify(start, Point::new(0.0, 120.0), 50.0).direction(),
//!     Some(SwipeDirection::Down)
//! );
//!
//! // Equal travel on both axes resolves to a horizontal swipe.
//! assert_eq!(
//!     classify(start, Point::new(-60.0, 60.0), 50.0).direction(),
//!     Some(SwipeDirection::Left)
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std` and `tracing/std`.
//! - `libm`: use Kurbo's `libm` backend for `no_std` targets.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod classify;
mod recognizer;
mod tracker;

pub use classify::{
    DEFAULT_SWIPE_THRESHOLD, GestureEvent, GestureResult, InputKind, SwipeDirection, classify,
};
pub use recognizer::GestureRecognizer;
pub use tracker::GestureState;
