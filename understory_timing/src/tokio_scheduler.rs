// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Scheduler`] backed by a Tokio runtime.
//!
//! Every recurring timer is a spawned task driving a [`tokio::time::Interval`].
//! Firings are sent as [`TimerId`]s over an unbounded channel whose receiver is
//! handed to the host, so the host decides on which task state is mutated.
//!
//! Cancelling aborts the task. A tick that was already sent stays in the
//! channel; consumers are expected to ignore ids they no longer own.

use core::time::Duration;
use std::collections::HashMap;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::{Scheduler, TimerId};

/// Smallest supported period; [`tokio::time::interval_at`] rejects zero.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Tokio-driven recurring timers.
///
/// [`Scheduler::schedule_repeating`] spawns onto the current runtime and therefore
/// must be called from within a Tokio runtime context.
#[derive(Debug)]
pub struct TokioScheduler {
    ticks: mpsc::UnboundedSender<TimerId>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    next_id: u64,
}

impl TokioScheduler {
    /// Creates a scheduler and the receiver on which its firings arrive.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (ticks, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            ticks,
            tasks: HashMap::new(),
            next_id: 0,
        };
        (scheduler, rx)
    }

    /// Returns the number of timers that have not been cancelled.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let id = TimerId::from_raw(self.next_id);
        self.next_id += 1;

        let period = period.max(MIN_PERIOD);
        let ticks = self.ticks.clone();
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if ticks.send(id).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        match self.tasks.remove(&id) {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn delivers_ticks_for_scheduled_timer() {
        let (mut scheduler, mut rx) = TokioScheduler::new();
        let id = scheduler.schedule_repeating(Duration::from_millis(100));

        assert_eq!(rx.recv().await, Some(id));
        assert_eq!(rx.recv().await, Some(id));
        assert_eq!(scheduler.active_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_goes_quiet() {
        let (mut scheduler, mut rx) = TokioScheduler::new();
        let id = scheduler.schedule_repeating(Duration::from_millis(100));
        assert_eq!(rx.recv().await, Some(id));

        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert_eq!(scheduler.active_count(), 0);

        let quiet = time::timeout(Duration::from_secs(1), rx.recv()).await;
        assert!(quiet.is_err(), "no tick after cancel");
    }
}
