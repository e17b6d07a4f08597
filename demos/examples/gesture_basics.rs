// Copyright 2026 the Zerozero Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture recognizer basics.
//!
//! Feed a few scripted input traces through `zerozero_gesture` and print what
//! each one was recognized as.
//!
//! Run:
//! - `cargo run -p zerozero_demos --example gesture_basics`

use std::cell::Cell;

use kurbo::Point;
use zerozero_demos::logging;
use zerozero_gesture::{GestureRecognizer, InputKind};

fn main() {
    logging::init("zerozero_gesture=trace");

    let taps = Cell::new(0_u32);
    let mut recognizer = GestureRecognizer::new()
        .on_swipe(|result| {
            if let Some(direction) = result.direction() {
                println!("  -> swipe {}", direction.as_str());
            }
        })
        .on_tap(|_| taps.set(taps.get() + 1));

    let traces: [(&str, InputKind, &[(f64, f64)]); 5] = [
        (
            "flick left",
            InputKind::Touch,
            &[(300.0, 200.0), (240.0, 204.0), (120.0, 210.0)],
        ),
        (
            "drag down",
            InputKind::Pointer,
            &[(100.0, 100.0), (104.0, 160.0), (110.0, 240.0)],
        ),
        ("short nudge", InputKind::Pointer, &[(50.0, 50.0), (80.0, 70.0)]),
        // A diagonal with equal travel on both axes counts as horizontal.
        ("diagonal", InputKind::Touch, &[(0.0, 0.0), (60.0, 60.0)]),
        ("tap", InputKind::Touch, &[(10.0, 10.0), (10.0, 10.0)]),
    ];

    for (name, kind, points) in traces {
        println!("{name} ({kind:?})");
        let Some((&first, rest)) = points.split_first() else {
            continue;
        };
        recognizer.pointer_down(kind, Point::from(first));
        let Some((&last, moves)) = rest.split_last() else {
            recognizer.cancel();
            continue;
        };
        for &pos in moves {
            if let Some(delta) = recognizer.pointer_move(kind, Point::from(pos)) {
                println!("  moved by ({:.0}, {:.0})", delta.x, delta.y);
            }
        }
        if let Some(result) = recognizer.pointer_up(kind, Point::from(last))
            && result.is_tap()
        {
            println!("  -> tap");
        }
    }

    // A touch press followed by the compatibility mouse release a browser
    // synthesizes is ignored; the touch release still completes the gesture.
    println!("touch with compat mouse events");
    recognizer.pointer_down(InputKind::Touch, Point::new(200.0, 200.0));
    recognizer.pointer_up(InputKind::Pointer, Point::new(200.0, 200.0));
    recognizer.pointer_up(InputKind::Touch, Point::new(200.0, 80.0));

    drop(recognizer);
    println!("{} tap(s) recognized", taps.get());
}
