// Copyright 2025 the Cartoview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cooperative periodic tick scheduler.
//!
//! ## Usage
//!
//! 1) [`TickScheduler::schedule`] a task under a key with an interval.
//! 2) Whenever time passes, call [`TickScheduler::advance`] with the elapsed
//!    milliseconds and run the handler for every key it returns.
//! 3) [`TickScheduler::cancel`] a task from its handler (or from anywhere
//!    else) once it has nothing left to do.
//!
//! A task fires at most once per `advance`, no matter how much time passed;
//! a slow host gets fewer ticks, never a burst of catch-up ticks. Tasks fire
//! in the order they were scheduled.

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Default tick interval shared by momentum, navigation and fades.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 30;

/// Keys due after an [`TickScheduler::advance`].
pub type DueTasks<K> = SmallVec<[K; 4]>;

#[derive(Clone, Copy, Debug)]
struct Task<K> {
    key: K,
    interval_ms: u32,
    elapsed_ms: u32,
}

/// Periodic tasks keyed by `K`.
#[derive(Clone, Debug)]
pub struct TickScheduler<K> {
    tasks: Vec<Task<K>>,
}

impl<K> Default for TickScheduler<K> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

impl<K: Copy + PartialEq> TickScheduler<K> {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire every `interval_ms`.
    ///
    /// Rescheduling a key that is already scheduled restarts it with the new
    /// interval. A zero interval is treated as one millisecond.
    pub fn schedule(&mut self, key: K, interval_ms: u32) {
        let interval_ms = interval_ms.max(1);
        if let Some(task) = self.tasks.iter_mut().find(|t| t.key == key) {
            task.interval_ms = interval_ms;
            task.elapsed_ms = 0;
        } else {
            self.tasks.push(Task {
                key,
                interval_ms,
                elapsed_ms: 0,
            });
        }
    }

    /// Cancels `key`. Returns `true` if it was scheduled.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.key != key);
        self.tasks.len() != before
    }

    /// Cancels every task.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Returns `true` if `key` is scheduled.
    #[must_use]
    pub fn is_scheduled(&self, key: K) -> bool {
        self.tasks.iter().any(|t| t.key == key)
    }

    /// Returns `true` if nothing is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Advances time by `elapsed_ms` and returns the keys that are due.
    pub fn advance(&mut self, elapsed_ms: u32) -> DueTasks<K> {
        let mut due = DueTasks::new();
        for task in &mut self.tasks {
            task.elapsed_ms = task.elapsed_ms.saturating_add(elapsed_ms);
            if task.elapsed_ms >= task.interval_ms {
                // Drop any backlog beyond a single tick.
                task.elapsed_ms = (task.elapsed_ms - task.interval_ms) % task.interval_ms;
                due.push(task.key);
            }
        }
        due
    }
}
