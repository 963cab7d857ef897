//! Input Guard Module
//!
//! Stateless defenses applied to request payloads before any business
//! logic runs: sanitizers that make untrusted text inert, format
//! validators that answer yes or no without ever erroring, and CSRF
//! token issue and verification.
//!
//! # Architecture
//!
//! Every function here is a pure function over its arguments. Nothing is
//! stored, nothing is locked, and everything is safe to call from
//! concurrent request handlers. The rate limiter in
//! [`crate::rate_limit`] is the stateful half of the defense layer; the
//! two share nothing.

// Text, payload, and file name sanitizers
pub mod sanitize;

// Format validators and the injection heuristic
pub mod validate;

// CSRF token issue and verification
pub mod csrf;

// Re-export the full guard surface for convenience
pub use csrf::{generate_token, validate_token, TOKEN_HEX_LEN};
pub use sanitize::{sanitize_file_name, sanitize_text, sanitize_value};
pub use validate::{
    has_sql_injection_pattern, is_valid_country_code, is_valid_date, is_valid_email, is_valid_url,
};

// Property-based tests module
#[cfg(test)]
mod proptests;
