// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use std::time::Duration;
use understory_timing::{Scheduler, TimerQueue};

fn populated(timers: u64) -> TimerQueue {
    let mut queue = TimerQueue::new();
    for i in 0..timers {
        queue.schedule_repeating(Duration::from_millis(10 + i % 97));
    }
    queue
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/advance");

    // Linear scan per firing; fine for a handful of timers, measured here for many.
    for timers in [1u64, 16, 256] {
        group.throughput(Throughput::Elements(timers));

        group.bench_with_input(BenchmarkId::new("one_second", timers), &timers, |b, &n| {
            b.iter_batched(
                || populated(n),
                |mut queue| {
                    black_box(queue.advance(Duration::from_secs(1)));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_schedule_cancel(c: &mut Criterion) {
    c.bench_function("timing/schedule_cancel", |b| {
        let mut queue = populated(32);
        b.iter(|| {
            let id = queue.schedule_repeating(black_box(Duration::from_millis(2_000)));
            black_box(queue.cancel(id));
        });
    });
}

criterion_group!(benches, bench_advance, bench_schedule_cancel);
criterion_main!(benches);
