//! Rate Limit Configuration
//!
//! Tunables for the fixed-window limiter and its background sweep.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::RateLimitError;

/// Default limits
pub const DEFAULT_MAX_REQUESTS: u32 = 10; // requests per window
pub const DEFAULT_WINDOW_SECS: u64 = 60; // window length
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300; // sweep cadence
pub const DEFAULT_GRACE_SECS: u64 = 60; // retention past window end

/// Rate limit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    pub enabled: bool,

    /// Maximum requests admitted per identifier per window
    pub max_requests: u32,

    /// Window length in seconds
    pub window_secs: u64,

    /// Background sweep interval in seconds
    pub sweep_interval_secs: u64,

    /// How long an expired entry is retained before the sweep may evict it,
    /// in seconds
    pub grace_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: DEFAULT_MAX_REQUESTS,
            window_secs: DEFAULT_WINDOW_SECS,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            grace_secs: DEFAULT_GRACE_SECS,
        }
    }
}

impl RateLimitConfig {
    /// Create a new rate limit configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("GATEGUARD_RATE_LIMIT_ENABLED") {
            config.enabled = val.parse().unwrap_or(true);
        }

        if let Ok(val) = std::env::var("GATEGUARD_MAX_REQUESTS") {
            if let Ok(limit) = val.parse() {
                config.max_requests = limit;
            }
        }

        if let Ok(val) = std::env::var("GATEGUARD_WINDOW_SECS") {
            if let Ok(secs) = val.parse() {
                config.window_secs = secs;
            }
        }

        if let Ok(val) = std::env::var("GATEGUARD_SWEEP_INTERVAL_SECS") {
            if let Ok(secs) = val.parse() {
                config.sweep_interval_secs = secs;
            }
        }

        if let Ok(val) = std::env::var("GATEGUARD_GRACE_SECS") {
            if let Ok(secs) = val.parse() {
                config.grace_secs = secs;
            }
        }

        config
    }

    /// Get window duration
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    /// Get sweep interval duration
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Get grace duration
    pub fn grace(&self) -> Duration {
        Duration::from_secs(self.grace_secs)
    }

    /// Disable rate limiting (for testing)
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Check that the configuration is usable.
    ///
    /// A zero request budget or a zero-length window would deny every
    /// request forever; a zero sweep interval would spin the sweeper.
    /// Grace may be zero: entries then become evictable as soon as their
    /// window closes.
    pub fn validate(&self) -> Result<(), RateLimitError> {
        if self.max_requests == 0 {
            return Err(RateLimitError::InvalidConfig(
                "max_requests must be greater than zero".to_string(),
            ));
        }

        if self.window_secs == 0 {
            return Err(RateLimitError::InvalidConfig(
                "window_secs must be greater than zero".to_string(),
            ));
        }

        if self.sweep_interval_secs == 0 {
            return Err(RateLimitError::InvalidConfig(
                "sweep_interval_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
