//! Literal text scanning helpers.
//!
//! All needles here are ASCII, so every match offset is a valid `str`
//! boundary and slicing the haystack at it cannot panic.

/// Byte offset of the first occurrence of `needle` in `haystack`,
/// comparing ASCII letters case-insensitively.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();

    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > hay.len() {
        return None;
    }

    hay.windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// Byte offset of the first `\n## X` where `X` is an ASCII uppercase letter.
///
/// The offset points at the newline, so slicing up to it excludes the heading.
pub(crate) fn find_next_h2(haystack: &str) -> Option<usize> {
    const MARKER: &[u8] = b"\n## ";

    haystack
        .as_bytes()
        .windows(MARKER.len() + 1)
        .position(|w| w.starts_with(MARKER) && w[MARKER.len()].is_ascii_uppercase())
}
