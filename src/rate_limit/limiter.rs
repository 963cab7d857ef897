//! Rate Limiter
//!
//! Fixed-window admission control over an injectable registry, plus the
//! background sweep that evicts identifiers nobody has used for a while.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::config::RateLimitConfig;
use super::error::RateLimitError;
use super::registry::RateLimitRegistry;
use crate::metrics;

/// Result of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    /// Whether the request is admitted
    pub allowed: bool,

    /// Requests left in the current window after this one
    pub remaining: u32,

    /// Time until the current window resets
    pub reset_in: Duration,
}

impl RateDecision {
    /// Create an admitted decision
    pub fn allowed(remaining: u32, reset_in: Duration) -> Self {
        Self {
            allowed: true,
            remaining,
            reset_in,
        }
    }

    /// Create a denied decision
    pub fn denied(reset_in: Duration) -> Self {
        Self {
            allowed: false,
            remaining: 0,
            reset_in,
        }
    }
}

/// Fixed-window rate limiter
///
/// Decisions (`check`, `check_with`, `sweep`) are synchronous and
/// bounded-time; only the sweeper lifecycle is async because it owns a
/// tokio task. Clones share the registry and the sweeper handle, so one
/// limiter can serve every route of a server instance.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Configuration, fixed at construction
    config: RateLimitConfig,

    /// Per-identifier window entries
    registry: RateLimitRegistry,

    /// Sweeper task handle
    sweeper_task: Arc<RwLock<Option<JoinHandle<()>>>>,
}

impl RateLimiter {
    /// Create a new rate limiter with its own empty registry
    pub fn new(config: RateLimitConfig) -> Result<Self, RateLimitError> {
        Self::with_registry(config, RateLimitRegistry::new())
    }

    /// Create a rate limiter over an existing registry
    ///
    /// Lets tests and embedders hand in the shared state explicitly.
    pub fn with_registry(
        config: RateLimitConfig,
        registry: RateLimitRegistry,
    ) -> Result<Self, RateLimitError> {
        config.validate()?;
        tracing::info!(
            "Rate limiter initialized: {} requests per {}s window",
            config.max_requests,
            config.window_secs
        );
        Ok(Self::build(config, registry))
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::build(RateLimitConfig::default(), RateLimitRegistry::new())
    }

    /// Create a disabled rate limiter (for testing)
    ///
    /// A disabled limiter admits every request with a full budget and
    /// records nothing.
    pub fn disabled() -> Self {
        Self::build(RateLimitConfig::disabled(), RateLimitRegistry::new())
    }

    fn build(config: RateLimitConfig, registry: RateLimitRegistry) -> Self {
        Self {
            config,
            registry,
            sweeper_task: Arc::new(RwLock::new(None)),
        }
    }

    /// Check whether a request from `identifier` is admitted, using the
    /// configured per-window budget.
    ///
    /// # Panics
    ///
    /// Panics if `identifier` is empty. That is a caller bug, not a
    /// runtime condition.
    pub fn check(&self, identifier: &str) -> RateDecision {
        self.check_with(identifier, self.config.max_requests, self.config.window())
    }

    /// Check with a per-call budget and window, for routes that need
    /// stricter or looser limits than the configured defaults. The request
    /// count is shared with every other check on the same identifier.
    ///
    /// # Panics
    ///
    /// Panics if `identifier` is empty, `max_requests` is zero, or
    /// `window` is zero. These are caller bugs, not runtime conditions.
    pub fn check_with(
        &self,
        identifier: &str,
        max_requests: u32,
        window: Duration,
    ) -> RateDecision {
        assert!(!identifier.is_empty(), "identifier must not be empty");
        assert!(max_requests > 0, "max_requests must be greater than zero");
        assert!(!window.is_zero(), "window must be non-zero");

        if !self.config.enabled {
            return RateDecision::allowed(max_requests, Duration::ZERO);
        }

        let decision = self
            .registry
            .apply(identifier, max_requests, window, Instant::now());

        if decision.allowed {
            metrics::REQUESTS_ALLOWED_TOTAL.inc();
        } else {
            metrics::REQUESTS_DENIED_TOTAL.inc();
            tracing::warn!(
                "Rate limit exceeded for {}: window resets in {:?}",
                identifier,
                decision.reset_in
            );
        }

        decision
    }

    /// Evict entries idle past the configured grace period.
    ///
    /// The background sweeper calls this on its interval; tests call it
    /// directly instead of waiting on wall-clock time.
    pub fn sweep(&self) -> usize {
        run_sweep(&self.registry, self.config.grace())
    }

    /// Start the background sweeper.
    ///
    /// No-op when a sweeper is already running. The task runs until
    /// `stop_sweeper` aborts it.
    pub async fn start_sweeper(&self) {
        let mut task_guard = self.sweeper_task.write().await;
        if task_guard.is_some() {
            return;
        }

        let registry = self.registry.clone();
        let grace = self.config.grace();
        let sweep_interval = self.config.sweep_interval();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(sweep_interval);

            loop {
                interval.tick().await;
                // The sweep body is synchronous, so an abort lands on the
                // tick await and never interrupts a sweep mid-lock.
                run_sweep(&registry, grace);
            }
        });

        *task_guard = Some(handle);
        tracing::info!("Rate limit sweeper started (interval {:?})", sweep_interval);
    }

    /// Stop the background sweeper
    pub async fn stop_sweeper(&self) {
        if let Some(task) = self.sweeper_task.write().await.take() {
            task.abort();
            tracing::info!("Rate limit sweeper stopped");
        }
    }

    /// Get the underlying registry
    pub fn registry(&self) -> &RateLimitRegistry {
        &self.registry
    }

    /// Get current configuration
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }
}

fn run_sweep(registry: &RateLimitRegistry, grace: Duration) -> usize {
    let evicted = registry.sweep(grace, Instant::now());

    metrics::SWEEP_EVICTIONS_TOTAL.inc_by(evicted as u64);
    metrics::TRACKED_IDENTIFIERS.set(registry.len() as i64);

    if evicted > 0 {
        tracing::debug!("Swept {} stale rate limit entries", evicted);
    }

    evicted
}
