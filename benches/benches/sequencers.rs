// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use zerozero_sequence::{
    DismissConfig, SequenceChain, Sequencer, Stage, TimedDismissSequencer, TypingConfig,
    TypingSequencer, WordRevealConfig, WordRevealSequencer,
};

const FRAME_MS: u64 = 16;

fn typing_config(lines: usize) -> TypingConfig {
    TypingConfig::new((0..lines).map(|i| format!("line {i}: initializing zero zero...")))
}

/// Advances `sequencer` one frame at a time until it finishes.
fn run_frames(mut sequencer: impl Sequencer) -> Option<u64> {
    let mut now = 0;
    while !sequencer.advance(now).is_finished() {
        now += FRAME_MS;
    }
    sequencer.completed_at()
}

fn bench_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence/typing");

    for lines in [1usize, 8, 32] {
        let config = typing_config(lines);
        group.bench_with_input(BenchmarkId::new("frames", lines), &config, |b, config| {
            b.iter(|| black_box(run_frames(TypingSequencer::start(config.clone(), 0))));
        });
        // One advance call that replays the whole timeline.
        group.bench_with_input(BenchmarkId::new("jump", lines), &config, |b, config| {
            b.iter(|| {
                let mut typing = TypingSequencer::start(config.clone(), 0);
                black_box(typing.advance(u64::MAX / 2))
            });
        });
    }

    group.finish();
}

fn bench_word_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence/word_reveal");

    for words in [4usize, 64, 512] {
        let text = vec!["zero"; words].join(" ");
        let config = WordRevealConfig::new(text);
        group.bench_with_input(BenchmarkId::new("frames", words), &config, |b, config| {
            b.iter(|| black_box(run_frames(WordRevealSequencer::start(config.clone(), 0))));
        });
    }

    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    c.bench_function("sequence/chain/onboarding", |b| {
        b.iter(|| {
            let chain = SequenceChain::<Stage>::new()
                .then(|at| TimedDismissSequencer::start(DismissConfig::new(2_400, 600), at).into())
                .then(|at| TypingSequencer::start(typing_config(3), at).into())
                .then(|at| {
                    WordRevealSequencer::start(
                        WordRevealConfig::new("everything starts from zero"),
                        at,
                    )
                    .into()
                })
                .start(0);
            black_box(run_frames(chain))
        });
    });
}

criterion_group!(benches, bench_typing, bench_word_reveal, bench_chain);
criterion_main!(benches);
