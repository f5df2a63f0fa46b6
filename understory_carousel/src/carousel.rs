// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::num::NonZeroUsize;

use kurbo::Point;
use tracing::{debug, trace, warn};
use understory_event_state::hover::{HoverEvent, HoverState};
use understory_event_state::swipe::{GestureState, SwipeDirection, SwipeTracker};
use understory_timing::{Scheduler, TimerId};

use crate::autoplay::Autoplay;
use crate::config::{CarouselConfig, HoverPolicy};
use crate::error::{ConfigError, Result};
use crate::index::{self, SlideIndex};
use crate::input::{CarouselEvent, ClickTarget, Command, Control, EventResponse};
use crate::view::SlideView;

/// Why autoplay is not running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PauseReason {
    /// Never started: before [`Carousel::init`], or `autoplay` is disabled.
    Initial,
    /// Explicit pause: [`Carousel::pause`], the pause control, or the space key.
    User,
    /// Stopped by a discrete navigation (next/previous/indicator/swipe).
    Navigation,
    /// Stopped because the pointer entered the container.
    Hover,
}

/// Autoplay status, including why it is paused.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// A recurring timer advances the slides.
    Playing,
    /// No timer is scheduled.
    Paused(PauseReason),
}

/// Display state for binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CarouselSnapshot {
    /// Index of the active slide.
    pub current_index: usize,
    /// Number of slides.
    pub slide_count: usize,
    /// Whether autoplay is running.
    pub is_playing: bool,
}

/// Hover regions tracked by the carousel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Region {
    Container,
}

/// Carousel interaction controller.
///
/// Reconciles the autoplay timer, discrete input (controls, indicators, keys) and
/// swipe gestures into one current slide and one play state. Every change goes
/// through the same path: the previous slide is deactivated on the view, the new
/// one activated.
///
/// `V` is the render layer and `S` the recurring-timer primitive, both owned by
/// the carousel for its lifetime. [`teardown`](Self::teardown) hands them back.
#[derive(Debug)]
pub struct Carousel<V, S> {
    config: CarouselConfig,
    index: SlideIndex,
    autoplay: Autoplay,
    play_state: PlayState,
    hover: HoverState<Region>,
    swipe: Option<SwipeTracker>,
    keyboard_bound: bool,
    view: V,
    scheduler: S,
}

impl<V: SlideView, S: Scheduler> Carousel<V, S> {
    /// Creates a carousel over `view`.
    ///
    /// Fails if the configuration is invalid or the view has no slides. Nothing is
    /// drawn and no timer is scheduled until [`init`](Self::init).
    pub fn new(config: CarouselConfig, view: V, scheduler: S) -> Result<Self> {
        config.validate()?;
        let count = NonZeroUsize::new(view.slide_count()).ok_or(ConfigError::NoSlides)?;
        let swipe = config
            .swipe
            .then_some(SwipeTracker::new(config.swipe_threshold_px));
        Ok(Self {
            index: SlideIndex::new(count),
            autoplay: Autoplay::new(config.interval()),
            play_state: PlayState::Paused(PauseReason::Initial),
            hover: HoverState::new(),
            swipe,
            keyboard_bound: false,
            config,
            view,
            scheduler,
        })
    }

    /// Binds the keyboard, activates the first slide, and starts autoplay if configured.
    ///
    /// Calling it again returns to the first slide without binding the keyboard twice.
    pub fn init(&mut self) {
        if !self.keyboard_bound {
            self.view.bind_keyboard();
            self.keyboard_bound = true;
        }
        self.goto_index(0);
        self.view.show_playing(self.is_playing());
        if self.config.autoplay {
            self.start_autoplay();
        }
        debug!(
            slides = self.index.count().get(),
            autoplay = self.config.autoplay,
            swipe = self.swipe.is_some(),
            "carousel initialized"
        );
    }

    /// Cancels autoplay, releases the keyboard, and returns the view and scheduler.
    pub fn teardown(mut self) -> (V, S) {
        self.autoplay.stop(&mut self.scheduler);
        if self.keyboard_bound {
            self.view.unbind_keyboard();
        }
        debug!("carousel torn down");
        let Self {
            view, scheduler, ..
        } = self;
        (view, scheduler)
    }

    /// Moves to slide `n`, wrapping negative and out-of-range values.
    ///
    /// Autoplay is left as it is. Returns the new index.
    pub fn goto_index(&mut self, n: i64) -> usize {
        let (previous, current) = self.index.set(n);
        let indicators = self.view.indicator_count();

        self.view.set_slide_active(previous, false);
        if previous < indicators {
            self.view.set_indicator_active(previous, false);
        }
        self.view.set_slide_active(current, true);
        if current < indicators {
            self.view.set_indicator_active(current, true);
        }

        debug!(from = previous, to = current, "slide changed");
        current
    }

    /// Like [`goto_index`](Self::goto_index) for a floating-point index.
    ///
    /// Fails with [`Error::InvalidIndex`](crate::Error::InvalidIndex) unless `n` is
    /// a finite integer; the carousel is unchanged in that case.
    pub fn goto_index_f64(&mut self, n: f64) -> Result<usize> {
        let n = index::integral(n)?;
        Ok(self.goto_index(n))
    }

    /// Like [`goto_index`](Self::goto_index) for an encoded index such as `"3"`.
    pub fn goto_encoded(&mut self, encoded: &str) -> Result<usize> {
        let n = index::parse_encoded(encoded).inspect_err(|_| {
            warn!(encoded = %encoded, "rejected slide index");
        })?;
        Ok(self.goto_index(n))
    }

    /// Stops autoplay and moves to slide `n`, as an indicator click does.
    pub fn jump_to(&mut self, n: i64) -> usize {
        self.stop_autoplay(PauseReason::Navigation);
        self.goto_index(n)
    }

    /// Stops autoplay and moves to the next slide.
    pub fn next(&mut self) -> usize {
        self.stop_autoplay(PauseReason::Navigation);
        self.goto_index(self.index.offset(1))
    }

    /// Stops autoplay and moves to the previous slide.
    pub fn prev(&mut self) -> usize {
        self.stop_autoplay(PauseReason::Navigation);
        self.goto_index(self.index.offset(-1))
    }

    /// Stops autoplay on behalf of the user.
    pub fn pause(&mut self) {
        if !self.stop_autoplay(PauseReason::User) {
            self.play_state = PlayState::Paused(PauseReason::User);
        }
    }

    /// Starts autoplay. A no-op while already playing.
    pub fn resume(&mut self) {
        self.start_autoplay();
    }

    /// Pauses if playing, resumes otherwise.
    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Handles a scheduler firing.
    ///
    /// Advances one slide if `id` is the running autoplay timer and returns `true`.
    /// Firings of cancelled or foreign timers are dropped.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.autoplay.owns(id) {
            trace!(%id, "ignoring stale timer firing");
            return false;
        }
        self.goto_index(self.index.offset(1));
        true
    }

    /// Routes a host event.
    ///
    /// Unrelated events are ignored. The only error is an indicator whose encoded
    /// target is not an integer; the carousel is left unchanged in that case.
    pub fn handle_event(&mut self, event: CarouselEvent) -> Result<EventResponse> {
        let response = match event {
            CarouselEvent::Click(ClickTarget::Control(control)) => self.run(match control {
                Control::Previous => Command::Previous,
                Control::Next => Command::Next,
                Control::PausePlay => Command::Toggle,
            }),
            CarouselEvent::Click(ClickTarget::Indicator(encoded)) => {
                let target = index::parse_encoded(&encoded).inspect_err(|_| {
                    warn!(encoded = %encoded, "rejected indicator target");
                })?;
                self.jump_to(target);
                EventResponse::navigated(true)
            }
            CarouselEvent::Click(ClickTarget::Other) => {
                trace!("ignoring click outside controls and indicators");
                EventResponse::IGNORED
            }
            CarouselEvent::KeyDown(key) => match key.command() {
                Some(Command::Toggle) => {
                    self.toggle();
                    EventResponse::prevent_default()
                }
                Some(command) => self.run(command),
                None => EventResponse::IGNORED,
            },
            CarouselEvent::PointerEnter => {
                self.pointer_enter();
                EventResponse::IGNORED
            }
            CarouselEvent::PointerLeave => {
                self.pointer_leave();
                EventResponse::IGNORED
            }
            CarouselEvent::PointerDown(pos) => match &mut self.swipe {
                Some(swipe) => {
                    swipe.start(Some(pos));
                    EventResponse::prevent_default()
                }
                None => EventResponse::IGNORED,
            },
            CarouselEvent::PointerMove(pos) | CarouselEvent::TouchMove(pos) => {
                self.swipe_move(pos)
            }
            CarouselEvent::PointerUp(pos) => self.finish_swipe(Some(pos)),
            CarouselEvent::TouchStart(pos) => {
                if let Some(swipe) = &mut self.swipe {
                    swipe.start(pos);
                }
                EventResponse::IGNORED
            }
            CarouselEvent::TouchEnd(pos) => self.finish_swipe(pos),
            CarouselEvent::TouchCancel => {
                self.cancel_swipe();
                EventResponse::IGNORED
            }
            CarouselEvent::Timer(id) => EventResponse::navigated(self.on_timer(id)),
        };
        Ok(response)
    }

    /// Index of the active slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index.current()
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.index.count().get()
    }

    /// Whether autoplay is running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.play_state == PlayState::Playing
    }

    /// Autoplay status with the pause reason.
    #[must_use]
    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    /// Current display state.
    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index(),
            slide_count: self.slide_count(),
            is_playing: self.is_playing(),
        }
    }

    /// Positions of the swipe in progress, or `None` without swipe support.
    #[must_use]
    pub fn gesture_state(&self) -> Option<GestureState> {
        self.swipe.as_ref().map(SwipeTracker::state)
    }

    /// The configuration this carousel was built with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The render layer.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The timer primitive.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// The timer primitive, mutably, for hosts that drive a virtual clock.
    ///
    /// Cancelling the autoplay timer through this reference leaves the carousel
    /// believing it is still playing.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn run(&mut self, command: Command) -> EventResponse {
        match command {
            Command::Previous => {
                self.prev();
                EventResponse::navigated(true)
            }
            Command::Next => {
                self.next();
                EventResponse::navigated(true)
            }
            Command::Toggle => {
                self.toggle();
                EventResponse::IGNORED
            }
        }
    }

    fn start_autoplay(&mut self) -> bool {
        if !self.autoplay.start(&mut self.scheduler) {
            return false;
        }
        self.play_state = PlayState::Playing;
        self.view.show_playing(true);
        debug!(interval_ms = self.config.interval_ms, "autoplay started");
        true
    }

    /// Stops autoplay, recording `reason`. Returns `false` if it was not running.
    fn stop_autoplay(&mut self, reason: PauseReason) -> bool {
        if !self.autoplay.stop(&mut self.scheduler) {
            return false;
        }
        self.play_state = PlayState::Paused(reason);
        self.view.show_playing(false);
        debug!(?reason, "autoplay stopped");
        true
    }

    fn pointer_enter(&mut self) {
        let entered = self
            .hover
            .update_path(&[Region::Container])
            .contains(&HoverEvent::Enter(Region::Container));
        if entered && self.config.pause_on_hover {
            self.stop_autoplay(PauseReason::Hover);
        }
    }

    /// Resumes on every leave, including one without a matching enter.
    fn pointer_leave(&mut self) {
        self.hover.clear();
        if self.config.pause_on_hover && self.resumes_on_leave() {
            self.start_autoplay();
        }
        self.cancel_swipe();
    }

    fn resumes_on_leave(&self) -> bool {
        match self.config.hover_policy {
            HoverPolicy::AlwaysResume => true,
            HoverPolicy::RespectUserPause => {
                self.play_state == PlayState::Paused(PauseReason::Hover)
            }
        }
    }

    fn swipe_move(&self, pos: Point) -> EventResponse {
        match &self.swipe {
            Some(swipe) if swipe.update(pos) => EventResponse::prevent_default(),
            _ => EventResponse::IGNORED,
        }
    }

    fn finish_swipe(&mut self, pos: Option<Point>) -> EventResponse {
        let direction = self.swipe.as_mut().and_then(|swipe| swipe.end(pos));
        match direction {
            Some(SwipeDirection::Forward) => self.run(Command::Next),
            Some(SwipeDirection::Backward) => self.run(Command::Previous),
            None => EventResponse::IGNORED,
        }
    }

    fn cancel_swipe(&mut self) {
        if let Some(swipe) = &mut self.swipe {
            swipe.cancel();
        }
    }
}
