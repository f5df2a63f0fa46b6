// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time options.

use alloc::string::String;
use core::time::Duration;

use crate::error::ConfigError;

/// What pointer-leave does when `pause_on_hover` is enabled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HoverPolicy {
    /// Leaving the container always resumes autoplay, even after an explicit pause.
    #[default]
    AlwaysResume,
    /// Leaving the container resumes autoplay only if hovering is what paused it.
    RespectUserPause,
}

/// Options recognized by [`Carousel::new`](crate::Carousel::new).
///
/// Every field has a default; override the ones you need with struct update
/// syntax or the `with_*` helpers:
///
/// ```
/// use understory_carousel::CarouselConfig;
///
/// let config = CarouselConfig {
///     pause_on_hover: true,
///     ..CarouselConfig::default()
/// }
/// .with_interval_ms(5_000);
/// assert_eq!(config.interval_ms, 5_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Selector of the container element. Not interpreted here; hosts use it to find their view.
    pub container_selector: String,
    /// Selector of the slide elements inside the container. Not interpreted here.
    pub slide_selector: String,
    /// Autoplay period in milliseconds. Must be positive.
    pub interval_ms: u64,
    /// Start autoplay during [`Carousel::init`](crate::Carousel::init).
    pub autoplay: bool,
    /// Pause while the pointer is over the container.
    pub pause_on_hover: bool,
    /// Horizontal distance a drag must exceed to count as a swipe. Must be positive.
    pub swipe_threshold_px: f64,
    /// Attach swipe gesture handling.
    pub swipe: bool,
    /// Resume rule for `pause_on_hover`.
    pub hover_policy: HoverPolicy,
}

impl CarouselConfig {
    /// Default container selector.
    pub const DEFAULT_CONTAINER_SELECTOR: &'static str = "#carousel";
    /// Default slide selector.
    pub const DEFAULT_SLIDE_SELECTOR: &'static str = ".slide";
    /// Default autoplay period.
    pub const DEFAULT_INTERVAL_MS: u64 = 2_000;
    /// Default swipe threshold.
    pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 100.0;

    /// Returns the autoplay period.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Sets the autoplay period.
    #[must_use]
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Enables or disables autoplay at init.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Enables or disables pause-on-hover.
    #[must_use]
    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    /// Sets the swipe threshold.
    #[must_use]
    pub fn with_swipe_threshold_px(mut self, threshold: f64) -> Self {
        self.swipe_threshold_px = threshold;
        self
    }

    /// Checks the numeric options.
    ///
    /// The slide count is checked separately, when the view is known.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if !(self.swipe_threshold_px.is_finite() && self.swipe_threshold_px > 0.0) {
            return Err(ConfigError::InvalidSwipeThreshold(self.swipe_threshold_px));
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            container_selector: Self::DEFAULT_CONTAINER_SELECTOR.into(),
            slide_selector: Self::DEFAULT_SLIDE_SELECTOR.into(),
            interval_ms: Self::DEFAULT_INTERVAL_MS,
            autoplay: true,
            pause_on_hover: false,
            swipe_threshold_px: Self::DEFAULT_SWIPE_THRESHOLD_PX,
            swipe: true,
            hover_policy: HoverPolicy::AlwaysResume,
        }
    }
}
