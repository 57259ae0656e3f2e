//! Reply subdomain: deterministic fallback replies and reply text checks.

pub mod fallback;

use crate::core::string::truncate_chars;

/// Longest reply accepted from the provider before it is cut
pub const MAX_REPLY_CHARS: usize = 4096;

/// Normalize provider text into a reply.
///
/// Trims whitespace and wrapping quotes; returns `None` when nothing usable
/// remains, including text made only of quote marks.
pub fn sanitize_reply(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim();

    if unquoted.trim_matches('"').trim().is_empty() {
        None
    } else {
        Some(truncate_chars(unquoted, MAX_REPLY_CHARS).to_string())
    }
}
