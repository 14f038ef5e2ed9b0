//! Text truncation.

#[cfg(feature = "no_std")]
use alloc::string::{String, ToString};

/// Marker appended to truncated text.
pub const ELLIPSIS: char = '…';

/// Trim `text` to at most `max_length` characters.
///
/// Text that already fits is returned unchanged. Longer text keeps its first
/// `max_length - 1` characters followed by [`ELLIPSIS`], so the result is
/// exactly `max_length` characters long. A `max_length` of 0 leaves only the
/// ellipsis.
///
/// Lengths count `char`s, not bytes.
///
/// # Example
///
/// ```rust
/// use view_xray::ellipsize;
///
/// assert_eq!(ellipsize("hello world", 20), "hello world");
/// assert_eq!(ellipsize("hello world", 5), "hell…");
/// assert_eq!(ellipsize("hello world", 0), "…");
/// ```
pub fn ellipsize(text: &str, max_length: usize) -> String {
    // Byte offset of the first char past the limit, if there is one.
    let Some((overflow, _)) = text.char_indices().nth(max_length) else {
        return text.to_string();
    };
    let keep = match max_length.checked_sub(1) {
        Some(keep) => text.char_indices().nth(keep).map_or(overflow, |(end, _)| end),
        None => 0,
    };
    let mut trimmed = String::with_capacity(keep + ELLIPSIS.len_utf8());
    trimmed.push_str(&text[..keep]);
    trimmed.push(ELLIPSIS);
    trimmed
}
