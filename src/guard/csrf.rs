//! CSRF Tokens
//!
//! Stateless issue and verification of per-session CSRF tokens. The server
//! hands a token to the client when the session is created, keeps the
//! reference copy with the session, and checks the echoed copy on every
//! state-changing request. Nothing is stored here.

use rand::rngs::OsRng;
use rand::TryRngCore;
use subtle::ConstantTimeEq;

use crate::metrics;

/// Random bytes drawn per token.
const TOKEN_BYTES: usize = 32;

/// Length of an encoded token in hex characters.
pub const TOKEN_HEX_LEN: usize = 2 * TOKEN_BYTES;

/// Generate a fresh CSRF token.
///
/// Draws 32 bytes directly from the operating system's CSPRNG and encodes
/// them as 64 lowercase hex characters.
///
/// # Panics
///
/// Panics if the OS random source is unavailable. A host that cannot
/// produce entropy cannot issue sessions either.
#[must_use]
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .expect("operating system CSPRNG unavailable");

    metrics::CSRF_TOKENS_ISSUED_TOTAL.inc();
    hex::encode(bytes)
}

/// Validate a candidate token against the session's reference copy.
///
/// Both must be exactly 64 characters and byte-equal. The equality check
/// is constant-time via the `subtle` crate, so a near-miss takes as long
/// as a first-character mismatch; the length precheck only discloses
/// well-formedness, which the attacker already knows.
#[must_use]
pub fn validate_token(candidate: &str, reference: &str) -> bool {
    if candidate.len() != TOKEN_HEX_LEN || reference.len() != TOKEN_HEX_LEN {
        return false;
    }

    candidate.as_bytes().ct_eq(reference.as_bytes()).into()
}
