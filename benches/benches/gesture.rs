// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use zerozero_gesture::{DEFAULT_SWIPE_THRESHOLD, GestureRecognizer, InputKind, classify};

/// End points on a grid around the origin, covering taps and every direction.
fn grid() -> Vec<Point> {
    let mut points = Vec::new();
    for x in (-200..=200).step_by(10) {
        for y in (-200..=200).step_by(10) {
            points.push(Point::new(f64::from(x), f64::from(y)));
        }
    }
    points
}

fn bench_classify(c: &mut Criterion) {
    let ends = grid();
    let mut group = c.benchmark_group("gesture/classify");
    group.throughput(Throughput::Elements(ends.len() as u64));
    group.bench_function("grid", |b| {
        b.iter(|| {
            for &end in &ends {
                black_box(classify(Point::ORIGIN, end, DEFAULT_SWIPE_THRESHOLD));
            }
        });
    });
    group.finish();
}

fn bench_recognizer(c: &mut Criterion) {
    let ends = grid();
    let mut group = c.benchmark_group("gesture/recognizer");
    group.throughput(Throughput::Elements(ends.len() as u64));
    group.bench_function("down_move_up", |b| {
        let mut recognizer = GestureRecognizer::new().on_swipe(|result| {
            black_box(result);
        });
        b.iter(|| {
            for &end in &ends {
                recognizer.pointer_down(InputKind::Touch, Point::ORIGIN);
                recognizer.pointer_move(InputKind::Touch, end.midpoint(Point::ORIGIN));
                black_box(recognizer.pointer_up(InputKind::Touch, end));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_classify, bench_recognizer);
criterion_main!(benches);
