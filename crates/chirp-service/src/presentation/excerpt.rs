//! Character-count truncation

/// First `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, not bytes, and does not look for word
/// boundaries. Text that already fits is returned unchanged.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}
