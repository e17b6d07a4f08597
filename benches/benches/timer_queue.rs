// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use zerozero_timing::TimerQueue;

/// Deadlines spread over a few seconds in a scrambled order.
fn deadlines(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| (i * 7_919) % 5_000).collect()
}

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer_queue/schedule");

    // Sequencers keep a handful of timers alive; the larger sizes show where
    // the sorted-vec layout stops being a good fit.
    for len in [4usize, 16, 64, 256] {
        let input = deadlines(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &input, |b, input| {
            b.iter_batched(
                TimerQueue::<u32>::new,
                |mut queue| {
                    for (i, &deadline) in input.iter().enumerate() {
                        queue.schedule(deadline, i as u32);
                    }
                    black_box(queue);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer_queue/pop_due");

    for len in [4usize, 16, 64, 256] {
        let mut filled = TimerQueue::new();
        for (i, deadline) in deadlines(len).into_iter().enumerate() {
            filled.schedule(deadline, i as u32);
        }
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &filled, |b, filled| {
            b.iter_batched(
                || filled.clone(),
                |mut queue| {
                    while let Some(expired) = queue.pop_due(u64::MAX) {
                        black_box(expired);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_schedule, bench_drain);
criterion_main!(benches);
