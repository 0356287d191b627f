//! Span module - Text range tracking.
//!
//! This module provides [`Span`], a half-open `[start, end)` byte range into
//! a UTF-8 buffer, plus small helpers for finding line bounds and snapping
//! offsets to character boundaries.
//!
//! # Examples
//!
//! ```
//! use redit_util::span::Span;
//!
//! let span = Span::new(10, 20);
//! assert_eq!(span.len(), 10);
//!
//! let point = Span::empty(4);
//! assert!(point.is_empty());
//! ```

mod line_index;
mod lines;

use std::fmt;
use std::ops::Range;

pub use line_index::{LineCol, LineIndex};
pub use lines::{floor_char_boundary, line_end, line_start};

/// Half-open byte range into source text
///
/// Both endpoints are byte offsets that fall on `char` boundaries of the
/// text the span was produced from.
///
/// # Examples
///
/// ```
/// use redit_util::span::Span;
///
/// let span = Span::new(0, 3);
/// assert_eq!(span.text("foo(bar)"), "foo");
/// assert!(span.contains(2));
/// assert!(!span.contains(3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Empty span at offset zero
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset, must not be smaller than `start`
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Create an empty span at a single offset
    #[inline]
    pub const fn empty(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Length in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` lies inside the span
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Whether two spans share at least one byte
    ///
    /// ```
    /// use redit_util::span::Span;
    ///
    /// assert!(Span::new(0, 4).intersects(Span::new(3, 6)));
    /// assert!(!Span::new(0, 3).intersects(Span::new(3, 6)));
    /// ```
    #[inline]
    pub const fn intersects(&self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Smallest span covering both `self` and `other`
    #[inline]
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Move both endpoints by the same signed amount
    ///
    /// Saturates at zero instead of underflowing.
    #[inline]
    pub fn shift(self, delta: isize) -> Span {
        let move_by = |offset: usize| offset.saturating_add_signed(delta);
        Span::new(move_by(self.start), move_by(self.end))
    }

    /// The byte range as a `std::ops::Range`
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Slice of `source` covered by this span
    ///
    /// Returns an empty string if the span does not fit `source`.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.range()).unwrap_or("")
    }

    /// The span expressed in character (Unicode scalar) offsets
    ///
    /// ```
    /// use redit_util::span::Span;
    ///
    /// let text = "é <- 1";
    /// // 'é' is two bytes wide
    /// assert_eq!(Span::new(3, 5).char_range(text), 2..4);
    /// ```
    pub fn char_range(&self, source: &str) -> Range<usize> {
        let end = floor_char_boundary(source, self.end);
        let start = floor_char_boundary(source, self.start.min(end));
        let char_start = source[..start].chars().count();
        let char_len = source[start..end].chars().count();
        char_start..char_start + char_len
    }
}

impl From<Range<usize>> for Span {
    #[inline]
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end.max(range.start))
    }
}

impl From<Span> for Range<usize> {
    #[inline]
    fn from(span: Span) -> Self {
        span.range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
