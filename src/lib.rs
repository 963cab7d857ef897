//! Gateguard Request-Defense Library
//!
//! This library provides the request-defense layer of a web service: a
//! fixed-window rate limiter with background eviction of idle identifiers,
//! and an input guard with sanitizers, format validators, and CSRF tokens.
//!
//! # Request Flow
//!
//! Handlers call [`RateLimiter::check`] first and reject over-budget
//! requests, using the decision's `reset_in` as the retry hint. Admitted
//! payloads then go through the [`guard`] sanitizers and validators before
//! any business logic runs.
//!
//! ```rust,no_run
//! use gateguard::{guard, RateLimitConfig, RateLimiter};
//!
//! # fn handle(client_ip: &str, comment: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let limiter = RateLimiter::new(RateLimitConfig::default())?;
//!
//! let decision = limiter.check(client_ip);
//! if !decision.allowed {
//!     // Reject with a retry hint of decision.reset_in.
//!     return Ok(());
//! }
//!
//! let safe_comment = guard::sanitize_text(comment);
//! # let _ = safe_comment;
//! # Ok(())
//! # }
//! ```
//!
//! # Limitations
//!
//! State lives in process memory. Counts are neither shared across server
//! instances nor preserved across restarts; a horizontally scaled
//! deployment needs a shared store behind the same interface.

pub mod guard;
pub mod metrics;
pub mod rate_limit;

pub use rate_limit::{
    RateDecision, RateLimitConfig, RateLimitEntry, RateLimitError, RateLimitRegistry, RateLimiter,
};
