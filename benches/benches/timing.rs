// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use orbit_rotation::Rotation;
use orbit_timing::{Animator, FRAME_INTERVAL_MS, NumericFields, TimerQueue};

fn bench_animator(c: &mut Criterion) {
    let mut group = c.benchmark_group("animator/tick");
    for runs in [1_usize, 16, 256] {
        group.bench_function(BenchmarkId::new("rotation", runs), |b| {
            b.iter_batched(
                || {
                    let mut animator = Animator::new();
                    for i in 0..runs {
                        let to = Rotation::new(-90.0, (i * 45 % 360) as f64);
                        let _ = animator.start(Rotation::ZERO, to, 500);
                    }
                    animator
                },
                |mut animator| {
                    let mut now = 0;
                    while !animator.is_empty() {
                        black_box(animator.tick(now));
                        now += FRAME_INTERVAL_MS;
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("numeric_fields", |b| {
        let from = NumericFields::new()
            .with("rot_x", 0.0)
            .with("rot_y", 0.0)
            .with("zoom", 1.0);
        let to = NumericFields::new()
            .with("rot_x", -90.0)
            .with("rot_y", 270.0)
            .with("zoom", 3.0);
        b.iter_batched(
            || {
                let mut animator = Animator::new();
                let _ = animator.start(from.clone(), to.clone(), 500);
                animator
            },
            |mut animator| {
                let mut now = 0;
                while !animator.is_empty() {
                    black_box(animator.tick(now));
                    now += FRAME_INTERVAL_MS;
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_timers(c: &mut Criterion) {
    c.bench_function("timers/debounce_reschedule", |b| {
        b.iter_batched(
            TimerQueue::<u32>::new,
            |mut timers| {
                // A scroll burst: every step cancels and re-arms the quiet timer.
                let mut pending = None;
                for step in 0..256_u64 {
                    if let Some(id) = pending.take() {
                        timers.cancel(id);
                    }
                    pending = Some(timers.schedule_at(step * 8 + 400, 0));
                }
                black_box(timers.pop_due(u64::MAX))
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_animator, bench_timers);
criterion_main!(benches);
