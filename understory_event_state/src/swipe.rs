// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe state helper: turn a start→move→end pointer sequence into a horizontal swipe.
//!
//! ## Usage
//!
//! 1) Call [`SwipeTracker::start`] on pointer-down / touch-start.
//! 2) Call [`SwipeTracker::update`] on every move; it reports whether the host should
//!    suppress default scrolling or text selection.
//! 3) Call [`SwipeTracker::end`] on pointer-up / touch-end. If the horizontal
//!    displacement exceeds the threshold it yields a [`SwipeDirection`].
//! 4) Call [`SwipeTracker::cancel`] on touch-cancel or when the pointer leaves the surface.
//!
//! The tracker resets after every completed or cancelled gesture, so state never
//! leaks from one drag into the next.
//!
//! ## Direction
//!
//! Only the x coordinate is considered, and all input families must report it in the
//! same coordinate space. A drag to the right (positive displacement) is
//! [`SwipeDirection::Backward`], a drag to the left is [`SwipeDirection::Forward`]:
//! content follows the finger, so pulling it rightwards reveals what came before.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::swipe::{SwipeDirection, SwipeTracker};
//!
//! let mut swipe = SwipeTracker::new(100.0);
//!
//! swipe.start(Some(Point::new(300.0, 40.0)));
//! assert!(swipe.update(Point::new(250.0, 42.0)));
//! assert_eq!(swipe.end(Some(Point::new(150.0, 45.0))), Some(SwipeDirection::Forward));
//!
//! // Short drags are discarded.
//! swipe.start(Some(Point::new(0.0, 0.0)));
//! assert_eq!(swipe.end(Some(Point::new(50.0, 0.0))), None);
//! assert!(!swipe.is_tracking());
//! ```

use kurbo::Point;

/// Raw positions recorded for the gesture in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GestureState {
    /// Horizontal position where the gesture started.
    pub start_x: Option<f64>,
    /// Horizontal position where the gesture ended.
    pub end_x: Option<f64>,
}

impl GestureState {
    /// Returns `true` if both positions are unset.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.start_x.is_none() && self.end_x.is_none()
    }
}

/// Navigation requested by a completed swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward drag: move to the following item.
    Forward,
    /// Rightward drag: move to the preceding item.
    Backward,
}

/// Tracks one horizontal swipe at a time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeTracker {
    state: GestureState,
    threshold: f64,
}

impl SwipeTracker {
    /// Creates an idle tracker.
    ///
    /// A gesture must travel strictly more than `threshold` units horizontally
    /// to count as a swipe.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            state: GestureState {
                start_x: None,
                end_x: None,
            },
            threshold,
        }
    }

    /// Returns the displacement threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the recorded positions.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns `true` between a successful [`start`](Self::start) and the end of the gesture.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state.start_x.is_some()
    }

    /// Starts a new gesture, discarding anything recorded before.
    ///
    /// `None` models a touch start without any active touch point; the tracker
    /// stays idle.
    pub fn start(&mut self, pos: Option<Point>) {
        self.state = GestureState {
            start_x: pos.map(|p| p.x),
            end_x: None,
        };
    }

    /// Observes a move event.
    ///
    /// Positions are not recorded. Returns `true` while a gesture is being tracked,
    /// meaning the host should suppress its default scroll/selection behavior.
    pub fn update(&self, _pos: Point) -> bool {
        self.is_tracking()
    }

    /// Completes the gesture and classifies it.
    ///
    /// Returns `None` for stray end events (no matching start), for ends without a
    /// position, and for displacements within the threshold. The tracker is idle
    /// afterwards in every case.
    pub fn end(&mut self, pos: Option<Point>) -> Option<SwipeDirection> {
        let start_x = self.state.start_x?;
        self.state.end_x = pos.map(|p| p.x);

        let direction = self.state.end_x.and_then(|end_x| {
            let distance = end_x - start_x;
            if distance > self.threshold {
                Some(SwipeDirection::Backward)
            } else if distance < -self.threshold {
                Some(SwipeDirection::Forward)
            } else {
                None
            }
        });

        self.cancel();
        direction
    }

    /// Abandons the gesture without classifying it.
    pub fn cancel(&mut self) {
        self.state = GestureState::default();
    }
}
