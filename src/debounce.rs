//! Single-slot debounce timer.
//!
//! Each call replaces the pending value and re-arms the deadline, so a burst
//! of calls inside the window collapses into one delivery of the last value.
//! Times are durations since app start (Bevy's `Time<Real>::elapsed`).

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    deadline: Duration,
    value: T,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `value`, superseding whatever was pending.
    pub fn call(&mut self, now: Duration, value: T) {
        self.pending = Some(Pending {
            deadline: now + self.window,
            value,
        });
    }

    /// Take the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Take the pending value without waiting.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    /// Time left until the pending value is due.
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_sub(now))
    }
}
