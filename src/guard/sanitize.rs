//! Payload Sanitizers
//!
//! Rewrites untrusted text so it is inert when echoed into HTML, walks
//! structured payloads to sanitize every string they carry, and flattens
//! hostile file names. Sanitizers always return a value; there is no error
//! surface.

use serde_json::Value;
use std::sync::LazyLock;

/// Script blocks, opening tag attributes allowed, matched non-greedily to
/// the first closing tag. `(?is)` makes the match case-insensitive and
/// lets `.` cross line boundaries.
static SCRIPT_BLOCK_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?is)<script[^>]*>.*?</script>")
        .expect("SCRIPT_BLOCK_REGEX is a valid regex pattern")
});

/// Any remaining tag-shaped run, including unknown and malformed tags.
static TAG_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"<[^>]*>").expect("TAG_REGEX is a valid regex pattern"));

/// Two or more consecutive dots in a file name.
static DOT_RUN_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\.{2,}").expect("DOT_RUN_REGEX is a valid regex pattern"));

/// Longest file name the sanitizer will emit.
const MAX_FILE_NAME_LEN: usize = 255;

/// Sanitize free text for safe embedding in HTML.
///
/// Script blocks are removed outright, content included. Every other tag
/// is stripped, its inner text kept. Whatever angle brackets and quotes
/// survive are escaped to entities, and the result is trimmed.
///
/// An unterminated `<script>` loses only its tag: with no closing tag
/// there is no block to remove, so the inner text falls through to the
/// tag strip and escape passes.
pub fn sanitize_text(input: &str) -> String {
    let without_scripts = SCRIPT_BLOCK_REGEX.replace_all(input, "");
    let without_tags = TAG_REGEX.replace_all(&without_scripts, "");

    without_tags
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#x27;")
        .replace('"', "&quot;")
        .trim()
        .to_string()
}

/// Sanitize every string inside a structured payload.
///
/// Strings go through [`sanitize_text`]; arrays keep their order; objects
/// are rebuilt with both keys and values sanitized. Null, booleans, and
/// numbers pass through untouched. The match is exhaustive over the value
/// type, so a new variant would fail to compile rather than slip through
/// unsanitized. If two keys sanitize to the same string, the later entry
/// wins.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(sanitize_text(&text)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (sanitize_text(&key), sanitize_value(val)))
                .collect(),
        ),
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(b),
        Value::Number(n) => Value::Number(n),
    }
}

/// Flatten a file name to a safe alphabet.
///
/// Characters outside `[A-Za-z0-9.-]` become `_`, runs of two or more
/// dots collapse to a single dot, and the result is cut at 255
/// characters. Collapsing happens after replacement, so separators cannot
/// reassemble a `..` that the replacement split up.
pub fn sanitize_file_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let collapsed = DOT_RUN_REGEX.replace_all(&replaced, ".");
    collapsed.chars().take(MAX_FILE_NAME_LEN).collect()
}
