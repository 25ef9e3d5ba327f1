//! Input debouncing
//!
//! Coalesces keystroke-driven query changes so the aggregator runs at
//! most once per quiescence window: every [`Debouncer::schedule`] call
//! replaces the pending query and restarts the timer, and only the
//! final settled value is yielded by [`Debouncer::take_ready`].
//!
//! This is a scheduling guarantee, not an ordering one: a query that
//! was superseded within the window is never yielded, but callers that
//! overlap in-flight lookups must still check a completed lookup's
//! query against the currently displayed one before rendering it.

use std::time::{Duration, Instant};

/// Default quiescence window in milliseconds
pub const DEBOUNCE_MS: u64 = 300;

#[derive(Debug)]
pub struct Debouncer {
    window_ms: u64,
    /// Monotonic origin for the wall-clock entry points
    epoch: Instant,
    /// Query waiting for the window to elapse
    pending: Option<String>,
    /// Timestamp (ms since epoch) of the last schedule call
    last_input_ms: Option<u64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window_ms: window.as_millis() as u64,
            epoch: Instant::now(),
            pending: None,
            last_input_ms: None,
        }
    }

    /// Record a new query value and restart the quiescence timer
    ///
    /// Any previously scheduled-but-unfired query is superseded and will
    /// never be yielded.
    pub fn schedule(&mut self, query: impl Into<String>) {
        let now_ms = self.now_ms();
        self.schedule_at(query, now_ms);
    }

    /// Yield the settled query once the window has elapsed
    ///
    /// Returns `None` while input is still changing or when nothing is
    /// pending; yields a given settled value at most once.
    pub fn take_ready(&mut self) -> Option<String> {
        let now_ms = self.now_ms();
        self.take_ready_at(now_ms)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_query(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Drop the pending query without yielding it
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_input_ms = None;
    }

    /// Deterministic variant of [`schedule`](Self::schedule) driven by
    /// an explicit clock, used by the event loop tick and by tests
    pub fn schedule_at(&mut self, query: impl Into<String>, now_ms: u64) {
        self.pending = Some(query.into());
        self.last_input_ms = Some(now_ms);
    }

    /// Deterministic variant of [`take_ready`](Self::take_ready)
    pub fn take_ready_at(&mut self, now_ms: u64) -> Option<String> {
        let last_input_ms = self.last_input_ms?;
        if now_ms.saturating_sub(last_input_ms) < self.window_ms {
            return None;
        }

        self.last_input_ms = None;
        self.pending.take()
    }

    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
