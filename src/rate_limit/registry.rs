//! Rate Limit Registry
//!
//! Shared storage for per-identifier window entries. The registry is the
//! injectable piece of limiter state: each server instance constructs its
//! own, and tests hand one in directly, instead of reaching through a
//! process-global singleton.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use super::entry::RateLimitEntry;
use super::limiter::RateDecision;

/// In-memory map of identifier to window entry
#[derive(Debug, Clone, Default)]
pub struct RateLimitRegistry {
    /// Entry storage
    entries: Arc<RwLock<HashMap<String, RateLimitEntry>>>,
}

impl RateLimitRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one admission attempt for `identifier`.
    ///
    /// The whole read-modify-write happens under the write lock, so
    /// concurrent attempts for the same identifier serialize and every
    /// admitted request is counted exactly once. A denied attempt leaves
    /// the entry untouched.
    pub fn apply(
        &self,
        identifier: &str,
        max_requests: u32,
        window: Duration,
        now: Instant,
    ) -> RateDecision {
        let mut entries = self.entries.write().unwrap();

        match entries.get_mut(identifier) {
            Some(entry) if !entry.has_expired(now) => {
                if entry.count < max_requests {
                    entry.count += 1;
                    RateDecision::allowed(max_requests - entry.count, entry.reset_in(now))
                } else {
                    RateDecision::denied(entry.reset_in(now))
                }
            }
            // No entry yet, or the previous window has closed.
            _ => {
                entries.insert(identifier.to_string(), RateLimitEntry::fresh(now, window));
                RateDecision::allowed(max_requests - 1, window)
            }
        }
    }

    /// Remove entries idle past `grace` and return how many were evicted
    pub fn sweep(&self, grace: Duration, now: Instant) -> usize {
        let mut entries = self.entries.write().unwrap();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_stale(now, grace));
        before - entries.len()
    }

    /// Look up the current entry for an identifier
    pub fn get(&self, identifier: &str) -> Option<RateLimitEntry> {
        let entries = self.entries.read().unwrap();
        entries.get(identifier).copied()
    }

    /// Number of tracked identifiers
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap();
        entries.len()
    }

    /// Whether no identifiers are tracked
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap();
        entries.clear();
    }
}
