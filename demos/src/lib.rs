// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Zerozero demos.
//!
//! - [`script`]: load an onboarding flow from TOML and build a [`SequenceChain`](zerozero_sequence::SequenceChain).
//! - [`frame`]: render sequencer state as plain-text frames for a terminal.
//! - [`logging`]: install the `tracing` subscriber the demos share.

pub mod frame;
pub mod logging;
pub mod script;
