//! Cancellable one-shot timer
//!
//! Both timed behaviors in the app (the slider debounce and the transient
//! highlight pulse) are the same primitive: schedule a value after a delay,
//! where a newer schedule supersedes the pending one. The timer is polled
//! from the frame loop with explicit `Instant`s, so a superseded deadline
//! can never fire a stale value and tests never need to sleep.

use std::time::{Duration, Instant};

/// A single pending value with a deadline
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value` to fire after the configured delay, replacing any
    /// pending value and its deadline.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Take the pending value if its deadline has passed. Fires at most once
    /// per schedule.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, for frame-repaint scheduling
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }
}
