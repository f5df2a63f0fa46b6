// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the carousel integration tests.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use core::time::Duration;

use understory_carousel::{Carousel, CarouselConfig, CarouselEvent, EventResponse, SlideView};
use understory_timing::TimerQueue;

/// View that records the marker state the carousel asked for.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub(crate) slides: Vec<bool>,
    pub(crate) indicators: Vec<bool>,
    pub(crate) glyph_playing: Option<bool>,
    pub(crate) keyboard_bound: bool,
    pub(crate) keyboard_binds: usize,
}

impl RecordingView {
    pub(crate) fn new(slides: usize, indicators: usize) -> Self {
        Self {
            slides: vec![false; slides],
            indicators: vec![false; indicators],
            ..Self::default()
        }
    }

    /// Indices of all slides currently marked active.
    pub(crate) fn active_slides(&self) -> Vec<usize> {
        self.slides
            .iter()
            .enumerate()
            .filter_map(|(i, &active)| active.then_some(i))
            .collect()
    }

    /// Indices of all indicators currently marked active.
    pub(crate) fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter_map(|(i, &active)| active.then_some(i))
            .collect()
    }
}

impl SlideView for RecordingView {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        self.slides[index] = active;
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        self.indicators[index] = active;
    }

    fn show_playing(&mut self, playing: bool) {
        self.glyph_playing = Some(playing);
    }

    fn bind_keyboard(&mut self) {
        self.keyboard_bound = true;
        self.keyboard_binds += 1;
    }

    fn unbind_keyboard(&mut self) {
        self.keyboard_bound = false;
    }
}

pub(crate) type TestCarousel = Carousel<RecordingView, TimerQueue>;

pub(crate) const INTERVAL: Duration = Duration::from_millis(2_000);

/// Response of an event that changed the slide.
pub(crate) const NAVIGATED: EventResponse = EventResponse {
    navigated: true,
    prevent_default: false,
};

/// Response of an event whose platform default must be suppressed.
pub(crate) const PREVENT_DEFAULT: EventResponse = EventResponse {
    navigated: false,
    prevent_default: true,
};

/// Builds and initializes a carousel with `slides` slides and as many indicators.
pub(crate) fn carousel(slides: usize, config: CarouselConfig) -> TestCarousel {
    let mut carousel = Carousel::new(
        config,
        RecordingView::new(slides, slides),
        TimerQueue::new(),
    )
    .unwrap();
    carousel.init();
    carousel
}

/// Runs the virtual clock forward, delivering each firing as it happens.
///
/// Returns how many firings advanced the carousel.
pub(crate) fn run_for(carousel: &mut TestCarousel, by: Duration) -> usize {
    let until = carousel.scheduler().now() + by;
    let mut advanced = 0;
    while let Some(id) = carousel.scheduler_mut().pop_due(until) {
        if carousel.on_timer(id) {
            advanced += 1;
        }
    }
    carousel.scheduler_mut().advance_to(until);
    advanced
}

/// Delivers a well-formed event and returns the response.
pub(crate) fn send(carousel: &mut TestCarousel, event: CarouselEvent) -> EventResponse {
    carousel.handle_event(event).unwrap()
}
