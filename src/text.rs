//! Small text helpers shared across the pipeline.

/// First `max_chars` characters of `s`, respecting char boundaries.
///
/// The pattern cascades only scan a bounded window of the body; this
/// is the slicing primitive they all use.
pub(crate) fn prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
