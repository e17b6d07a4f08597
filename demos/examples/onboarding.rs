// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Onboarding flow on a virtual clock.
//!
//! Plays an onboarding script (the bundled one, or a TOML file given on the
//! command line) through a `SequenceChain`, printing a text frame whenever the
//! visible state changes.
//!
//! Run:
//! - `cargo run -p zerozero_demos --example onboarding`
//! - `cargo run -p zerozero_demos --example onboarding -- path/to/script.toml`
//! - `RUST_LOG=zerozero_sequence=trace cargo run -p zerozero_demos --example onboarding`

use std::process::ExitCode;

use tracing::{error, info};
use zerozero_demos::frame::describe;
use zerozero_demos::logging;
use zerozero_demos::script::{OnboardingScript, ScriptError};
use zerozero_sequence::{Sequencer, Status};
use zerozero_timing::ManualClock;

/// One display frame at 60 Hz, rounded down.
const FRAME_MS: u64 = 16;

fn load() -> Result<OnboardingScript, ScriptError> {
    match std::env::args().nth(1) {
        Some(path) => OnboardingScript::load(path),
        None => OnboardingScript::bundled(),
    }
}

fn main() -> ExitCode {
    logging::init("info");

    let script = match load() {
        Ok(script) => script,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut clock = ManualClock::new(0);
    let mut onboarding = script
        .into_chain()
        .on_complete(|| info!("onboarding complete"))
        .start(clock.now());

    let mut last = String::new();
    while onboarding.advance(clock.now()) == Status::Running {
        if let Some(stage) = onboarding.active() {
            let frame = describe(stage, clock.now());
            if frame != last {
                println!("{:>6} ms  {frame}", clock.now());
                last = frame;
            }
        }
        clock.advance(FRAME_MS);
    }

    if let Some(at) = onboarding.completed_at() {
        println!("{at:>6} ms  done");
    }
    ExitCode::SUCCESS
}
