// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host events understood by [`Carousel::handle_event`](crate::Carousel::handle_event).

use alloc::string::String;

use kurbo::Point;
use understory_timing::TimerId;

/// Keys the carousel reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Previous slide.
    ArrowLeft,
    /// Next slide.
    ArrowRight,
    /// Toggle autoplay.
    Space,
    /// Anything else; ignored.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` (or `code`) value.
    ///
    /// ```
    /// use understory_carousel::Key;
    ///
    /// assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
    /// assert_eq!(Key::from_dom(" "), Key::Space);
    /// assert_eq!(Key::from_dom("Enter"), Key::Other);
    /// ```
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            " " | "Space" | "Spacebar" => Self::Space,
            _ => Self::Other,
        }
    }

    pub(crate) fn command(self) -> Option<Command> {
        match self {
            Self::ArrowLeft => Some(Command::Previous),
            Self::ArrowRight => Some(Command::Next),
            Self::Space => Some(Command::Toggle),
            Self::Other => None,
        }
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self::from_dom(key)
    }
}

/// Built-in controls rendered by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    /// "Previous" button.
    Previous,
    /// "Next" button.
    Next,
    /// Pause/resume button.
    PausePlay,
}

/// What a click landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// One of the built-in controls.
    Control(Control),
    /// An indicator, carrying its encoded target index (for example `data-slide-to`).
    Indicator(String),
    /// Anything else inside the carousel; ignored.
    Other,
}

/// A host event routed to the carousel.
///
/// Positions of pointer and touch events must share one coordinate space.
#[derive(Clone, Debug, PartialEq)]
pub enum CarouselEvent {
    /// Click or tap.
    Click(ClickTarget),
    /// Document-wide key press.
    KeyDown(Key),
    /// Pointer entered the container.
    PointerEnter,
    /// Pointer left the container.
    PointerLeave,
    /// Mouse button pressed inside the container.
    PointerDown(Point),
    /// Mouse moved inside the container.
    PointerMove(Point),
    /// Mouse button released inside the container.
    PointerUp(Point),
    /// Touch started; `None` if the event carried no touch point.
    TouchStart(Option<Point>),
    /// Touch moved.
    TouchMove(Point),
    /// Touch ended; `None` if the event carried no changed touch point.
    TouchEnd(Option<Point>),
    /// Touch sequence was interrupted.
    TouchCancel,
    /// A scheduler firing.
    Timer(TimerId),
}

/// How an event was handled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct EventResponse {
    /// The current slide changed.
    pub navigated: bool,
    /// The host should suppress the platform default (scrolling, text selection, native drag).
    pub prevent_default: bool,
}

impl EventResponse {
    /// Nothing happened.
    pub const IGNORED: Self = Self {
        navigated: false,
        prevent_default: false,
    };

    pub(crate) const fn navigated(navigated: bool) -> Self {
        Self {
            navigated,
            prevent_default: false,
        }
    }

    pub(crate) const fn prevent_default() -> Self {
        Self {
            navigated: false,
            prevent_default: true,
        }
    }
}

/// Discrete commands shared by keys and controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Previous,
    Next,
    Toggle,
}
