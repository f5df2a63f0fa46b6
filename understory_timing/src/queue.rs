// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use crate::{Scheduler, TimerId};

/// Smallest period a timer can have; zero periods are clamped to this.
const MIN_PERIOD: Duration = Duration::from_nanos(1);

#[derive(Copy, Clone, Debug)]
struct Entry {
    id: TimerId,
    period: Duration,
    deadline: Duration,
}

/// Deterministic virtual-clock [`Scheduler`].
///
/// Time starts at zero and only moves forward when [`advance`](Self::advance),
/// [`advance_to`](Self::advance_to) or [`pop_due`](Self::pop_due) is called.
/// Firings are reported in deadline order; timers sharing a deadline are
/// reported in the order they were scheduled.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    timers: Vec<Entry>,
}

impl TimerQueue {
    /// Creates an empty queue at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: Vec::new(),
        }
    }

    /// Returns the current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Returns the number of active timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Returns `true` if no timer is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Returns `true` if `id` refers to an active timer.
    #[must_use]
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Returns the period of an active timer.
    #[must_use]
    pub fn period(&self, id: TimerId) -> Option<Duration> {
        self.timers.iter().find(|t| t.id == id).map(|t| t.period)
    }

    /// Returns the earliest pending deadline, if any timer is active.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.deadline).min()
    }

    /// Advances the clock by `by` and returns every firing in order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let target = self.now.saturating_add(by);
        self.advance_to(target)
    }

    /// Advances the clock to `target` and returns every firing in order.
    ///
    /// Targets in the past leave the clock unchanged.
    pub fn advance_to(&mut self, target: Duration) -> Vec<TimerId> {
        let mut fired = Vec::new();
        while let Some(id) = self.pop_due(target) {
            fired.push(id);
        }
        if target > self.now {
            self.now = target;
        }
        fired
    }

    /// Pops the next firing due at or before `until`.
    ///
    /// The clock moves to that firing's deadline and the timer is rescheduled one
    /// period later. Hosts that need to react between consecutive firings (for
    /// example because a handler may cancel a timer) should drive the queue with
    /// this method rather than [`advance`](Self::advance).
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let (index, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.deadline <= until)
            .min_by_key(|(_, t)| (t.deadline, t.id))?;
        let entry = &mut self.timers[index];
        self.now = self.now.max(entry.deadline);
        entry.deadline = entry.deadline.saturating_add(entry.period);
        Some(entry.id)
    }
}

impl Scheduler for TimerQueue {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let id = TimerId::from_raw(self.next_id);
        self.next_id += 1;
        let period = period.max(MIN_PERIOD);
        self.timers.push(Entry {
            id,
            period,
            deadline: self.now.saturating_add(period),
        });
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }
}
