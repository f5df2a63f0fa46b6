// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use std::time::Duration;
use understory_carousel::{
    Carousel, CarouselConfig, CarouselEvent, ClickTarget, Control, Key, SlideView,
};
use understory_timing::TimerQueue;

/// View that only remembers which slide is lit.
struct Flags(Vec<bool>);

impl SlideView for Flags {
    fn slide_count(&self) -> usize {
        self.0.len()
    }

    fn indicator_count(&self) -> usize {
        self.0.len()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        self.0[index] = active;
    }
}

fn carousel(slides: usize) -> Carousel<Flags, TimerQueue> {
    let config = CarouselConfig::default();
    let mut carousel = Carousel::new(config, Flags(vec![false; slides]), TimerQueue::new())
        .expect("valid benchmark carousel");
    carousel.init();
    carousel
}

fn mixed_input(len: usize) -> Vec<CarouselEvent> {
    (0..len)
        .map(|i| match i % 8 {
            0 => CarouselEvent::KeyDown(Key::ArrowRight),
            1 => CarouselEvent::KeyDown(Key::ArrowLeft),
            2 => CarouselEvent::Click(ClickTarget::Control(Control::Next)),
            3 => CarouselEvent::Click(ClickTarget::Indicator((i % 5).to_string())),
            4 => CarouselEvent::PointerDown(Point::new(400.0, 0.0)),
            5 => CarouselEvent::PointerMove(Point::new(300.0, 0.0)),
            6 => CarouselEvent::PointerUp(Point::new(200.0, 0.0)),
            _ => CarouselEvent::KeyDown(Key::Space),
        })
        .collect()
}

fn bench_handle_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/handle_event");

    for len in [64usize, 1_024, 16_384] {
        let events = mixed_input(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("mixed", len), &events, |b, events| {
            b.iter_batched(
                || (carousel(5), events.clone()),
                |(mut carousel, events)| {
                    for event in events {
                        black_box(carousel.handle_event(event).expect("well-formed input"));
                    }
                    black_box(carousel);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_goto_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/goto_index");

    // Cost should not depend on slide count or on how far out of range the target is.
    for slides in [3usize, 64, 4_096] {
        group.bench_with_input(BenchmarkId::new("far_negative", slides), &slides, |b, &n| {
            let mut carousel = carousel(n);
            let mut target = i64::MIN;
            b.iter(|| {
                target = target.wrapping_add(7_919);
                black_box(carousel.goto_index(black_box(target)));
            });
        });
    }

    group.finish();
}

fn bench_autoplay(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/autoplay");
    group.measurement_time(Duration::from_secs(3));

    for ticks in [100u32, 10_000] {
        group.throughput(Throughput::Elements(u64::from(ticks)));

        group.bench_with_input(BenchmarkId::new("ticks", ticks), &ticks, |b, &ticks| {
            b.iter_batched(
                || carousel(5),
                |mut carousel| {
                    let until = CarouselConfig::default().interval() * ticks;
                    while let Some(id) = carousel.scheduler_mut().pop_due(until) {
                        carousel.on_timer(id);
                    }
                    black_box(carousel);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_handle_event, bench_goto_index, bench_autoplay);
criterion_main!(benches);
