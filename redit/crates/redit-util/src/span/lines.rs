//! Line bounds and char-boundary helpers.
//!
//! Both line helpers scan outward from the offset only as far as the nearest
//! newline; no per-document line table is kept.

/// Largest char boundary of `text` that is `<= offset`
///
/// Offsets past the end clamp to `text.len()`.
///
/// # Examples
///
/// ```
/// use redit_util::floor_char_boundary;
///
/// let text = "aé";
/// assert_eq!(floor_char_boundary(text, 2), 1); // inside 'é'
/// assert_eq!(floor_char_boundary(text, 99), 3);
/// ```
pub fn floor_char_boundary(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    // A UTF-8 sequence is at most four bytes, so this loop runs at most three times.
    let mut at = offset;
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

/// Byte offset where the line containing `offset` starts
///
/// # Examples
///
/// ```
/// use redit_util::line_start;
///
/// let text = "line1\nline2\nline3";
/// assert_eq!(line_start(text, 8), 6);
/// assert_eq!(line_start(text, 6), 6);
/// assert_eq!(line_start(text, 5), 0); // the newline belongs to line 1
/// ```
pub fn line_start(text: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(text, offset);
    text[..offset].rfind('\n').map_or(0, |newline| newline + 1)
}

/// Byte offset just past the end of the line containing `offset`
///
/// The terminating newline is included; the last line ends at `text.len()`.
///
/// # Examples
///
/// ```
/// use redit_util::line_end;
///
/// let text = "line1\nline2";
/// assert_eq!(line_end(text, 2), 6);
/// assert_eq!(line_end(text, 6), 11);
/// ```
pub fn line_end(text: &str, offset: usize) -> usize {
    let offset = floor_char_boundary(text, offset);
    text[offset..]
        .find('\n')
        .map_or(text.len(), |newline| offset + newline + 1)
}
