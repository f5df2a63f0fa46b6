// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic recurring timers for UI runtimes.
//!
//! UI state machines often need "call me back every N milliseconds" without
//! owning an event loop. This crate splits that need in two:
//!
//! - [`Scheduler`]: the narrow interface a state machine talks to. It can
//!   schedule a recurring timer and cancel it again; each timer is identified by
//!   an opaque [`TimerId`].
//! - Implementations owned by the host. Firings are *not* delivered through
//!   callbacks. Instead the host learns which [`TimerId`] fired and routes it back
//!   into its state machine on its own event loop, which keeps all state mutation
//!   on one logical thread.
//!
//! Two implementations ship with the crate:
//!
//! - [`TimerQueue`]: a deterministic virtual clock. Time only moves when the
//!   caller advances it, which makes it the natural choice for tests and for hosts
//!   that already have a frame clock.
//! - `TokioScheduler` (feature `tokio`): spawns one interval task per timer and
//!   sends [`TimerId`]s over an unbounded channel.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_timing::{Scheduler, TimerQueue};
//!
//! let mut queue = TimerQueue::new();
//! let id = queue.schedule_repeating(Duration::from_millis(100));
//!
//! // Nothing is due before the first period elapses.
//! assert!(queue.advance(Duration::from_millis(99)).is_empty());
//!
//! // Crossing two deadlines yields two firings of the same timer.
//! assert_eq!(queue.advance(Duration::from_millis(101)), vec![id, id]);
//!
//! // Cancelled timers never fire again.
//! assert!(queue.cancel(id));
//! assert!(queue.advance(Duration::from_secs(10)).is_empty());
//! ```
//!
//! ## Stale ticks
//!
//! Hosts that buffer firings (for example in a channel) may observe a tick for a
//! timer that was cancelled after the tick was produced. State machines should
//! compare the incoming [`TimerId`] with the one they currently own and drop
//! anything else.
//!
//! This crate is `no_std` and uses `alloc`, unless the `tokio` feature is enabled.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod queue;

#[cfg(feature = "tokio")]
mod tokio_scheduler;

use core::fmt;
use core::time::Duration;

pub use queue::TimerQueue;
#[cfg(feature = "tokio")]
pub use tokio_scheduler::TokioScheduler;

/// Opaque handle of a scheduled recurring timer.
///
/// Handles are unique within the [`Scheduler`] that issued them and are never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Creates a handle from its raw value.
    ///
    /// Intended for [`Scheduler`] implementations outside this crate.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value of this handle.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Recurring-timer primitive provided by the host.
pub trait Scheduler {
    /// Schedules a timer that fires every `period`, first after one full period.
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Cancels a timer. Returns `true` if the timer was active.
    ///
    /// Cancelling an unknown or already cancelled timer is a no-op.
    fn cancel(&mut self, id: TimerId) -> bool;
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        (**self).schedule_repeating(period)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        (**self).cancel(id)
    }
}
