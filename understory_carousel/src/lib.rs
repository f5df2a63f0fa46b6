// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless carousel controller.
//!
//! A carousel cycles a fixed set of slides, one active at a time. Three kinds of
//! input compete to change it:
//!
//! - an **autoplay** timer that advances periodically,
//! - **discrete** input: next/previous controls, indicators, arrow keys, the space key
//!   and the pause/resume control,
//! - **swipe** gestures built from pointer or touch drags.
//!
//! [`Carousel`] reconciles them into one current slide and one play state. It owns
//! no UI and no event loop: a [`SlideView`] receives "active"/"inactive" and
//! play/pause glyph updates, and an [`understory_timing::Scheduler`] provides the
//! recurring timer. The host translates its native events into [`CarouselEvent`]s.
//!
//! ## Rules
//!
//! - Slide indices wrap in both directions (see [`wrap_index`]).
//! - Every discrete navigation stops autoplay first. Toggling (space key, pause
//!   control) does not navigate.
//! - Autoplay owns at most one timer. Firings of a timer that was cancelled are ignored,
//!   so buffered ticks cannot advance a paused carousel.
//! - A swipe counts only past `swipe_threshold_px`. Dragging right goes to the
//!   previous slide, dragging left to the next.
//! - With `pause_on_hover`, entering the container pauses and leaving resumes,
//!   subject to [`HoverPolicy`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_carousel::{Carousel, CarouselConfig, CarouselEvent, ClickTarget, Key, SlideView};
//! use understory_timing::TimerQueue;
//!
//! #[derive(Default)]
//! struct Strip {
//!     active: [bool; 4],
//! }
//!
//! impl SlideView for Strip {
//!     fn slide_count(&self) -> usize {
//!         self.active.len()
//!     }
//!
//!     fn set_slide_active(&mut self, index: usize, active: bool) {
//!         self.active[index] = active;
//!     }
//! }
//!
//! let mut carousel =
//!     Carousel::new(CarouselConfig::default(), Strip::default(), TimerQueue::new()).unwrap();
//! carousel.init();
//! assert!(carousel.is_playing());
//!
//! // Let the autoplay timer fire once.
//! for id in carousel.scheduler_mut().advance(Duration::from_millis(2_000)) {
//!     carousel.on_timer(id);
//! }
//! assert_eq!(carousel.current_index(), 1);
//!
//! // Arrow keys navigate and stop autoplay.
//! let response = carousel.handle_event(CarouselEvent::KeyDown(Key::ArrowLeft)).unwrap();
//! assert!(response.navigated);
//! assert_eq!(carousel.current_index(), 0);
//! assert!(!carousel.is_playing());
//!
//! // Indicators carry an encoded target.
//! let response = carousel
//!     .handle_event(CarouselEvent::Click(ClickTarget::Indicator("3".into())))
//!     .unwrap();
//! assert!(response.navigated);
//! assert_eq!(carousel.view().active, [false, false, false, true]);
//! ```
//!
//! ## Logging
//!
//! Transitions are reported through [`tracing`] at `debug` level and ignored input at
//! `trace` level. The crate never installs a subscriber.
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo, `thiserror` and `tracing`.
//! - `libm`: lets Kurbo do its math without `std`.
//! - `serde`: derive `Serialize`/`Deserialize` for [`CarouselConfig`] and [`HoverPolicy`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod autoplay;
mod carousel;
mod config;
mod error;
mod index;
mod input;
mod view;

pub use carousel::{Carousel, CarouselSnapshot, PauseReason, PlayState};
pub use config::{CarouselConfig, HoverPolicy};
pub use error::{ConfigError, Error, Result};
pub use index::wrap_index;
pub use input::{CarouselEvent, ClickTarget, Control, EventResponse, Key};
pub use view::SlideView;

pub use understory_event_state::swipe::GestureState;
pub use understory_timing::TimerId;
