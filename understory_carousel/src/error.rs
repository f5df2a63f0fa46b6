// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use thiserror::Error;

/// Errors surfaced by [`Carousel`](crate::Carousel).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A slide index that is not a finite integer.
    #[error("invalid slide index {input:?}: expected a finite integer")]
    InvalidIndex {
        /// The rejected input, as received.
        input: String,
    },
    /// The carousel cannot be constructed with this configuration.
    #[error("invalid carousel configuration: {0}")]
    Configuration(#[from] ConfigError),
}

/// Reasons a configuration is rejected at construction.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The render layer reported zero slides.
    #[error("carousel has no slides")]
    NoSlides,
    /// `interval_ms` was zero.
    #[error("autoplay interval must be positive")]
    ZeroInterval,
    /// `swipe_threshold_px` was zero, negative, or not finite.
    #[error("swipe threshold must be a positive finite number, got {0}")]
    InvalidSwipeThreshold(f64),
}

/// Result alias used throughout this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
