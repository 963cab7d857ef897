//! Rate Limit Entry
//!
//! A single identifier's standing within its current fixed window.

use std::time::{Duration, Instant};

/// Request count and window boundary for one identifier.
///
/// An entry only exists after at least one admitted request, so `count` is
/// always at least 1. The count grows until `window_end` passes; the next
/// admitted request after that replaces the entry with a fresh window.
/// Timestamps are `Instant`s, so wall-clock adjustments never distort a
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitEntry {
    /// Requests admitted in the current window
    pub count: u32,

    /// When the current window closes
    pub window_end: Instant,
}

impl RateLimitEntry {
    /// Open a fresh window at `now` with the first request already counted
    pub fn fresh(now: Instant, window: Duration) -> Self {
        Self {
            count: 1,
            window_end: now + window,
        }
    }

    /// Whether the window has closed
    pub fn has_expired(&self, now: Instant) -> bool {
        now >= self.window_end
    }

    /// Whether the entry has sat past its grace period and may be evicted
    pub fn is_stale(&self, now: Instant, grace: Duration) -> bool {
        now > self.window_end + grace
    }

    /// Time until the window closes (zero once it has)
    pub fn reset_in(&self, now: Instant) -> Duration {
        self.window_end.saturating_duration_since(now)
    }
}
