// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Onboarding scripts: a TOML list of stages turned into a [`SequenceChain`].
//!
//! ```toml
//! [[stage]]
//! kind = "dismiss"
//! display_duration_ms = 2400
//! fade_out_duration_ms = 600
//!
//! [[stage]]
//! kind = "typing"
//! messages = ["initializing zero zero..."]
//!
//! [[stage]]
//! kind = "word_reveal"
//! text = "everything starts from zero"
//! ```
//!
//! Omitted timings fall back to each sequencer's defaults, except for
//! `dismiss` stages, which must spell out both durations.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use zerozero_sequence::{
    DismissConfig, SequenceChain, Stage, TimedDismissSequencer, TypingConfig, TypingSequencer,
    WordRevealConfig, WordRevealSequencer,
};

/// The onboarding flow bundled with the demos.
pub const DEFAULT_SCRIPT: &str = include_str!("../scripts/onboarding.toml");

/// One stage of an onboarding script.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StageSpec {
    /// A static visual shown for a fixed time, then faded out.
    Dismiss(DismissConfig),
    /// Lines typed one character at a time.
    Typing(TypingConfig),
    /// A text block revealed one word at a time.
    WordReveal(WordRevealConfig),
}

impl StageSpec {
    /// Starts this stage at `at`.
    #[must_use]
    pub fn start(self, at: u64) -> Stage {
        match self {
            Self::Dismiss(config) => TimedDismissSequencer::start(config, at).into(),
            Self::Typing(config) => TypingSequencer::start(config, at).into(),
            Self::WordReveal(config) => WordRevealSequencer::start(config, at).into(),
        }
    }
}

/// An ordered list of stages.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OnboardingScript {
    /// Stages in playback order.
    #[serde(rename = "stage")]
    pub stages: Vec<StageSpec>,
}

/// Errors produced while loading an [`OnboardingScript`].
#[derive(Debug)]
pub enum ScriptError {
    /// The script file could not be read.
    Io(std::io::Error),
    /// The script is not valid TOML or does not match the expected shape.
    Parse(toml::de::Error),
    /// The script parsed but lists no stages.
    Empty,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read onboarding script: {err}"),
            Self::Parse(err) => write!(f, "invalid onboarding script: {err}"),
            Self::Empty => f.write_str("onboarding script has no stages"),
        }
    }
}

impl core::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Empty => None,
        }
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<toml::de::Error> for ScriptError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}

impl OnboardingScript {
    /// Parses a script from TOML source.
    pub fn from_toml(source: &str) -> Result<Self, ScriptError> {
        let script: Self = toml::from_str(source)?;
        if script.stages.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(script)
    }

    /// Reads and parses a script file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let script = Self::from_toml(&source)?;
        info!(path = %path.display(), stages = script.stages.len(), "loaded onboarding script");
        Ok(script)
    }

    /// The bundled script.
    pub fn bundled() -> Result<Self, ScriptError> {
        Self::from_toml(DEFAULT_SCRIPT)
    }

    /// Builds a chain that plays every stage in order, not yet started.
    #[must_use]
    pub fn into_chain(self) -> SequenceChain<Stage> {
        self.stages
            .into_iter()
            .fold(SequenceChain::new(), |chain, spec| {
                chain.then(move |at| spec.start(at))
            })
    }
}
