// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use understory_timing::{Scheduler, TimerId};

/// Whether a recurring timer is currently owned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum AutoplayState {
    Stopped,
    Running(TimerId),
}

/// Owns at most one recurring timer.
#[derive(Clone, Debug)]
pub(crate) struct Autoplay {
    state: AutoplayState,
    interval: Duration,
}

impl Autoplay {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            state: AutoplayState::Stopped,
            interval,
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        matches!(self.state, AutoplayState::Running(_))
    }

    /// Returns `true` if `id` is the timer this autoplay currently owns.
    pub(crate) fn owns(&self, id: TimerId) -> bool {
        self.state == AutoplayState::Running(id)
    }

    /// Schedules the timer unless one is already running. Returns `true` on change.
    pub(crate) fn start(&mut self, scheduler: &mut impl Scheduler) -> bool {
        if self.is_running() {
            return false;
        }
        let id = scheduler.schedule_repeating(self.interval);
        self.state = AutoplayState::Running(id);
        true
    }

    /// Cancels the owned timer, if any. Returns `true` on change.
    pub(crate) fn stop(&mut self, scheduler: &mut impl Scheduler) -> bool {
        let AutoplayState::Running(id) = self.state else {
            return false;
        };
        scheduler.cancel(id);
        self.state = AutoplayState::Stopped;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_timing::TimerQueue;

    #[test]
    fn start_is_idempotent() {
        let mut queue = TimerQueue::new();
        let mut autoplay = Autoplay::new(Duration::from_millis(10));

        assert!(autoplay.start(&mut queue));
        assert!(!autoplay.start(&mut queue));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn stop_cancels_and_forgets_the_timer() {
        let mut queue = TimerQueue::new();
        let mut autoplay = Autoplay::new(Duration::from_millis(10));
        autoplay.start(&mut queue);
        let AutoplayState::Running(id) = autoplay.state else {
            panic!("autoplay should be running");
        };

        assert!(autoplay.stop(&mut queue));
        assert!(!autoplay.owns(id));
        assert!(queue.is_empty());
        assert!(!autoplay.stop(&mut queue));
    }

    #[test]
    fn restart_uses_a_fresh_timer() {
        let mut queue = TimerQueue::new();
        let mut autoplay = Autoplay::new(Duration::from_millis(10));
        autoplay.start(&mut queue);
        let first = autoplay.state;
        autoplay.stop(&mut queue);
        autoplay.start(&mut queue);

        assert_ne!(autoplay.state, first);
        assert!(autoplay.is_running());
        assert_eq!(queue.len(), 1);
    }
}
