//! Rate Limit Error Types
//!
//! This module defines the error types that can occur when constructing or
//! configuring the limiter. Admission decisions themselves never error:
//! denial is a normal return value, not a fault.

/// Error types for rate limiter construction and configuration
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
