// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless carousel demo.
//!
//! Wires [`Carousel`] to a Tokio-backed timer and a text strip, then plays a
//! scripted sequence of keyboard, click, and swipe input while autoplay runs.
//!
//! Run with `RUST_LOG=debug` to see every transition. Settings come from
//! `carousel.toml` (or the path given as the first argument) and `CAROUSEL_*`
//! environment variables.

mod settings;
mod strip;

use core::time::Duration;

use anyhow::Result;
use kurbo::Point;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_carousel::{Carousel, CarouselEvent, ClickTarget, Control, Key};
use understory_timing::TokioScheduler;

use crate::strip::TextStrip;

const SLIDES: [&str; 5] = ["harbor", "lighthouse", "dunes", "pier", "sunset"];
const SCRIPT_STEP: Duration = Duration::from_millis(1_500);

/// Input played against the carousel, one step per [`SCRIPT_STEP`].
fn script() -> Vec<CarouselEvent> {
    vec![
        // Idle pointer motion is ignored while autoplay keeps running.
        CarouselEvent::PointerMove(Point::new(0.0, 0.0)),
        CarouselEvent::PointerMove(Point::new(0.0, 0.0)),
        CarouselEvent::KeyDown(Key::ArrowRight),
        CarouselEvent::KeyDown(Key::Space),
        CarouselEvent::PointerDown(Point::new(400.0, 120.0)),
        CarouselEvent::PointerMove(Point::new(320.0, 122.0)),
        CarouselEvent::PointerUp(Point::new(200.0, 125.0)),
        CarouselEvent::Click(ClickTarget::Indicator("0".into())),
        CarouselEvent::Click(ClickTarget::Control(Control::PausePlay)),
        CarouselEvent::TouchStart(Some(Point::new(100.0, 80.0))),
        CarouselEvent::TouchEnd(Some(Point::new(260.0, 80.0))),
        CarouselEvent::KeyDown(Key::Space),
    ]
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let path = std::env::args().nth(1);
    let config = settings::load(path.as_deref())?;
    info!(
        interval_ms = config.interval_ms,
        pause_on_hover = config.pause_on_hover,
        swipe = config.swipe,
        "starting carousel demo"
    );

    let (scheduler, mut ticks) = TokioScheduler::new();
    let mut carousel = Carousel::new(config, TextStrip::new(SLIDES), scheduler)?;
    carousel.init();
    info!("{}", carousel.view());

    let mut steps = time::interval_at(time::Instant::now() + SCRIPT_STEP, SCRIPT_STEP);
    steps.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut script = script().into_iter();

    loop {
        tokio::select! {
            Some(id) = ticks.recv() => {
                if carousel.on_timer(id) {
                    info!("{}", carousel.view());
                }
            }
            _ = steps.tick() => {
                let Some(event) = script.next() else { break };
                info!(?event, "input");
                let response = carousel.handle_event(event)?;
                if response.navigated || response.prevent_default {
                    info!(
                        navigated = response.navigated,
                        prevent_default = response.prevent_default,
                        "{}",
                        carousel.view()
                    );
                }
            }
        }
    }

    let snapshot = carousel.snapshot();
    let (strip, _scheduler) = carousel.teardown();
    info!(
        current = snapshot.current_index,
        playing = snapshot.is_playing,
        "demo finished: {strip}"
    );
    Ok(())
}
