// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::ToOwned;
use alloc::format;
use core::num::NonZeroUsize;

use crate::error::{Error, Result};

/// Maps any integer onto `0..count`, wrapping in both directions.
///
/// `-1` maps to `count - 1` and `count` maps to `0`.
///
/// ```
/// use core::num::NonZeroUsize;
/// use understory_carousel::wrap_index;
///
/// let five = NonZeroUsize::new(5).unwrap();
/// assert_eq!(wrap_index(-1, five), 4);
/// assert_eq!(wrap_index(5, five), 0);
/// assert_eq!(wrap_index(-12, five), 3);
/// ```
#[must_use]
pub fn wrap_index(n: i64, count: NonZeroUsize) -> usize {
    let count = count.get() as i128;
    usize::try_from(i128::from(n).rem_euclid(count)).unwrap_or_default()
}

/// Current slide and the fixed slide count.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SlideIndex {
    current: usize,
    count: NonZeroUsize,
}

impl SlideIndex {
    pub(crate) fn new(count: NonZeroUsize) -> Self {
        Self { current: 0, count }
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }

    pub(crate) fn count(&self) -> NonZeroUsize {
        self.count
    }

    /// Index `delta` steps away from the current one, before wrapping.
    pub(crate) fn offset(&self, delta: i64) -> i64 {
        i64::try_from(self.current)
            .unwrap_or(i64::MAX)
            .saturating_add(delta)
    }

    /// Moves to `n` (wrapped) and returns `(previous, current)`.
    pub(crate) fn set(&mut self, n: i64) -> (usize, usize) {
        let previous = self.current;
        self.current = wrap_index(n, self.count);
        (previous, self.current)
    }
}

/// Accepts integral finite floats that fit in `i64`.
pub(crate) fn integral(value: f64) -> Result<i64> {
    // `i64::MAX as f64` rounds up to 2^63, hence the strict upper bound.
    const LOWER: f64 = -9_223_372_036_854_775_808.0;
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    // NaN and infinities fall outside the range.
    if (LOWER..UPPER).contains(&value) {
        #[expect(clippy::cast_possible_truncation, reason = "range checked above")]
        let n = value as i64;
        if n as f64 == value {
            return Ok(n);
        }
    }
    Err(Error::InvalidIndex {
        input: format!("{value}"),
    })
}

/// Parses an indicator's encoded target, such as a `data-slide-to` attribute.
///
/// Surrounding whitespace is ignored; integral decimals like `"3.0"` are accepted.
pub(crate) fn parse_encoded(encoded: &str) -> Result<i64> {
    let trimmed = encoded.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(|value| integral(value).ok())
        .ok_or_else(|| Error::InvalidIndex {
            input: encoded.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn wraps_both_directions() {
        assert_eq!(wrap_index(-1, count(5)), 4);
        assert_eq!(wrap_index(5, count(5)), 0);
        assert_eq!(wrap_index(7, count(5)), 2);
        assert_eq!(wrap_index(-6, count(5)), 4);
        assert_eq!(wrap_index(i64::MIN, count(1)), 0);
    }

    #[test]
    fn set_reports_previous_and_current() {
        let mut index = SlideIndex::new(count(3));
        assert_eq!(index.set(2), (0, 2));
        assert_eq!(index.set(index.offset(1)), (2, 0));
        assert_eq!(index.current(), 0);
        assert_eq!(index.count().get(), 3);
    }

    #[test]
    fn integral_accepts_whole_numbers_only() {
        assert_eq!(integral(3.0), Ok(3));
        assert_eq!(integral(-2.0), Ok(-2));
        assert!(integral(1.5).is_err());
        assert!(integral(f64::NAN).is_err());
        assert!(integral(f64::NEG_INFINITY).is_err());
        assert!(integral(1e19).is_err());
    }

    #[test]
    fn integral_handles_range_edges_and_small_fractions() {
        assert_eq!(integral(-9_223_372_036_854_775_808.0), Ok(i64::MIN));
        assert!(integral(i64::MAX as f64).is_err(), "rounds up to 2^63");
        assert!(integral(-0.5).is_err());
        assert!(integral(f64::EPSILON).is_err());
        assert_eq!(integral(-0.0), Ok(0));
        assert_eq!(integral(4_503_599_627_370_497.0), Ok(4_503_599_627_370_497));
    }

    #[test]
    fn parse_encoded_targets() {
        assert_eq!(parse_encoded("3"), Ok(3));
        assert_eq!(parse_encoded(" 4 "), Ok(4));
        assert_eq!(parse_encoded("2.0"), Ok(2));
        assert_eq!(parse_encoded("-1"), Ok(-1));
        assert_eq!(
            parse_encoded("next"),
            Err(Error::InvalidIndex {
                input: "next".into()
            })
        );
        assert!(parse_encoded("").is_err());
        assert!(parse_encoded("NaN").is_err());
        assert!(parse_encoded("inf").is_err());
    }
}
