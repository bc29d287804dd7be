// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for per-event gesture work: drag deltas, pinch moves and the
//! full controller path.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use orbit_cube::{OrbitConfig, OrbitController};
use orbit_event_state::drag::{DragProfile, RotationDrag};
use orbit_event_state::pinch::{PinchState, ZoomLimits};
use orbit_event_state::pointer::{PointerSource, TouchPoint};
use orbit_rotation::{Rotation, rotation_delta};

/// A wobbly drag path that crosses quadrant boundaries now and then.
fn drag_path(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.05;
            Point::new(100.0 + 60.0 * t.cos() + 2.0 * t, 100.0 + 40.0 * (1.7 * t).sin())
        })
        .collect()
}

fn bench_rotation_delta(c: &mut Criterion) {
    let path = drag_path(256);
    c.bench_function("rotation/delta", |b| {
        b.iter(|| {
            for p in &path {
                black_box(rotation_delta(
                    Point::new(100.0, 100.0),
                    black_box(*p),
                    130.0,
                    180.0,
                ));
            }
        })
    });
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag/update");
    for len in [64_usize, 1024] {
        let path = drag_path(len);
        for (name, profile) in [
            ("axis_locked", DragProfile::AXIS_LOCKED),
            ("incremental", DragProfile::INCREMENTAL),
        ] {
            group.bench_function(BenchmarkId::new(name, len), |b| {
                b.iter_batched(
                    || {
                        let mut drag = RotationDrag::default();
                        drag.start(path[0], Rotation::new(-30.0, 45.0));
                        drag
                    },
                    |mut drag| {
                        for p in &path[1..] {
                            black_box(drag.update(*p, 130.0, profile));
                        }
                        black_box(drag.end())
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let frames: Vec<[TouchPoint<()>; 2]> = (0..256)
        .map(|i| {
            let spread = 50.0 + (i as f64 * 0.1).sin() * 40.0;
            [
                TouchPoint::at(200.0 - spread, 150.0),
                TouchPoint::at(200.0 + spread, 150.0),
            ]
        })
        .collect();

    c.bench_function("pinch/move", |b| {
        b.iter_batched(
            || {
                let mut pinch = PinchState::new(ZoomLimits::default());
                pinch.touch_start(&frames[0], Point::ZERO);
                pinch
            },
            |mut pinch| {
                for touches in &frames[1..] {
                    black_box(pinch.touch_move(touches, Point::ZERO, 400.0));
                }
                black_box(pinch.touch_end::<()>(&[]))
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_controller(c: &mut Criterion) {
    let path = drag_path(256);
    let config = OrbitConfig::default();
    c.bench_function("controller/drag_gesture", |b| {
        b.iter_batched(
            || {
                let mut orbit = OrbitController::new(config).unwrap();
                orbit.attach(Rect::new(0.0, 0.0, 400.0, 300.0));
                orbit
            },
            |mut orbit| {
                orbit.pointer_down(&PointerSource::<()>::mouse(path[0]), 0);
                for p in &path[1..] {
                    orbit.pointer_move(&PointerSource::<()>::mouse(*p));
                }
                orbit.pointer_up(&PointerSource::<()>::mouse(path[path.len() - 1]), 1);
                orbit.tick(1);
                black_box(orbit.drain_events())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_rotation_delta,
    bench_drag,
    bench_pinch,
    bench_controller
);
criterion_main!(benches);
