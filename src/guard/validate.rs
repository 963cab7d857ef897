//! Format Validators
//!
//! Pure predicates over untrusted input. Malformed input is an ordinary
//! `false`, never an error or a panic, so these can sit directly on
//! request-handling paths.

use chrono::NaiveDate;
use std::sync::LazyLock;

/// Plausible email shape: something, an `@`, something, a dot, something,
/// with no whitespace and no second `@` anywhere.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX is a valid regex pattern")
});

/// Zero-padded `YYYY-MM-DD` shape.
static DATE_SHAPE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("DATE_SHAPE_REGEX is a valid regex pattern")
});

/// SQL statement keywords, case-insensitive, on word boundaries.
static SQL_KEYWORD_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)\b(select|insert|update|delete|drop|union|alter|create)\b")
        .expect("SQL_KEYWORD_REGEX is a valid regex pattern")
});

/// SQL comment markers, statement terminators, and quotes.
static SQL_TOKEN_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r#"(--|/\*|\*/|;|'|")"#).expect("SQL_TOKEN_REGEX is a valid regex pattern")
});

/// Tautology probes of the `OR 1=1` family.
static SQL_OR_EQUALITY_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)\bor\b\s+\d+\s*=\s*\d+")
        .expect("SQL_OR_EQUALITY_REGEX is a valid regex pattern")
});

/// Tautology probes of the `AND 1=1` family.
static SQL_AND_EQUALITY_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)\band\b\s+\d+\s*=\s*\d+")
        .expect("SQL_AND_EQUALITY_REGEX is a valid regex pattern")
});

/// Check whether `email` looks like an email address.
///
/// This is a plausibility check, not RFC validation: one `@`, no
/// whitespace, and a dotted domain part. Deliverability is a different
/// question answered elsewhere.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check whether `date` is a real calendar date in `YYYY-MM-DD` form.
///
/// The shape must be exact, zero-padding included, and the date must
/// exist: `2024-02-29` passes, `2023-02-29` does not.
pub fn is_valid_date(date: &str) -> bool {
    if !DATE_SHAPE_REGEX.is_match(date) {
        return false;
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// Check whether `code` is a two-letter uppercase ASCII country code.
///
/// Only the shape is checked; `XX` passes even though no such country is
/// assigned.
pub fn is_valid_country_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Check whether `input` parses as an absolute URL.
///
/// Delegates to the WHATWG parser in the `url` crate, so scheme handling
/// and normalization follow the standard. Relative references fail.
pub fn is_valid_url(input: &str) -> bool {
    url::Url::parse(input).is_ok()
}

/// Check whether `input` contains anything that looks like SQL injection.
///
/// Matches statement keywords, comment and quote tokens, and `OR`/`AND`
/// numeric tautologies. This is a best-effort secondary signal for
/// logging and anomaly flagging: it will flag prose that happens to
/// mention `select` or carry an apostrophe, and a crafted payload can
/// evade it. Parameterized queries remain the actual injection boundary.
pub fn has_sql_injection_pattern(input: &str) -> bool {
    SQL_KEYWORD_REGEX.is_match(input)
        || SQL_TOKEN_REGEX.is_match(input)
        || SQL_OR_EQUALITY_REGEX.is_match(input)
        || SQL_AND_EQUALITY_REGEX.is_match(input)
}
