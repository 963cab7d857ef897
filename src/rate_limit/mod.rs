//! Fixed-Window Rate Limiting Module
//!
//! This module provides per-identifier admission control with fixed windows
//! and a background sweep that evicts idle identifiers.
//!
//! # Features
//!
//! - Fixed-window counting: up to N requests per identifier per window
//! - Denials report time until the window resets and consume nothing
//! - Injectable registry, so each server instance owns its own state
//! - Deterministic sweep trigger alongside the background sweeper task
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Rate Limiter                          │
//! │         check / check_with        sweeper lifecycle         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │      Registry (identifier → count, window end)       │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod limiter;
pub mod registry;

pub use config::RateLimitConfig;
pub use entry::RateLimitEntry;
pub use error::RateLimitError;
pub use limiter::{RateDecision, RateLimiter};
pub use registry::RateLimitRegistry;
