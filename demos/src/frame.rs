// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain-text frames for terminal demos.

use zerozero_sequence::{DismissPhase, Stage, TypingSequencer, WordPhase, WordRevealSequencer};

/// Renders `stage` at `now` as a single line of text.
///
/// The line starts with the stage kind and its opacity, followed by whatever
/// content is currently visible.
#[must_use]
pub fn describe(stage: &Stage, now: u64) -> String {
    let mut line = String::new();
    let opacity = stage.opacity(now);
    match stage {
        Stage::Typing(typing) => {
            line.push_str(&format!("[typing  {opacity:.2}] "));
            push_typing(&mut line, typing);
        }
        Stage::WordReveal(reveal) => {
            line.push_str(&format!("[words   {opacity:.2}] "));
            push_words(&mut line, reveal);
        }
        Stage::Dismiss(dismiss) => {
            let label = match dismiss.phase() {
                DismissPhase::Visible => "visible",
                DismissPhase::FadingOut { .. } => "fading",
                DismissPhase::Dismissed => "dismissed",
                DismissPhase::Disposed => "disposed",
            };
            line.push_str(&format!("[dismiss {opacity:.2}] {label}"));
        }
    }
    line
}

fn push_typing(line: &mut String, typing: &TypingSequencer) {
    let mut lines = typing.revealed_lines().peekable();
    while let Some(text) = lines.next() {
        line.push_str(text);
        if lines.peek().is_some() {
            line.push_str(" / ");
        }
    }
    if typing.caret_visible() {
        line.push('_');
    }
}

fn push_words(line: &mut String, reveal: &WordRevealSequencer) {
    for (i, word) in reveal.visible_words().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(word);
    }
    if reveal.phase() == WordPhase::Holding {
        line.push_str(" (hold)");
    }
}
