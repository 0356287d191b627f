//! Precomputed line table for one text.

use std::fmt;
use std::ops::Range;

use super::{floor_char_boundary, Span};

/// Zero-based line and character column of an offset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    /// Line number, starting at 0
    pub line: usize,
    /// Column in characters (Unicode scalars) from the line start
    pub column: usize,
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// Line start offsets of a text, for offset to line lookups
///
/// Built once per text version. A text of `n` newlines has `n + 1` lines;
/// the last one may be empty.
///
/// # Examples
///
/// ```
/// use redit_util::{LineIndex, Span};
///
/// let text = "x <- 1\ny <- 2\n";
/// let index = LineIndex::new(text);
/// assert_eq!(index.line_count(), 3);
/// assert_eq!(index.line_of(9), 1);
/// assert_eq!(index.line_span(1), Some(Span::new(7, 14)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of each line start; always begins with 0
    line_starts: Vec<usize>,
    /// Length of the indexed text in bytes
    len: usize,
}

impl LineIndex {
    /// Index the lines of `text`
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Length in bytes of the indexed text
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the indexed text was empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of lines (always at least one)
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where `line` starts, or `None` past the last line
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Byte range of `line`, including its terminating newline
    pub fn line_span(&self, line: usize) -> Option<Span> {
        let start = self.line_start(line)?;
        let end = self.line_start(line + 1).unwrap_or(self.len);
        Some(Span::new(start, end))
    }

    /// Line containing `offset`; offsets past the end land on the last line
    ///
    /// A newline belongs to the line it terminates.
    pub fn line_of(&self, offset: usize) -> usize {
        let offset = offset.min(self.len);
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        }
    }

    /// Lines touched by `span`
    ///
    /// An empty span touches the line it sits on.
    ///
    /// ```
    /// use redit_util::{LineIndex, Span};
    ///
    /// let index = LineIndex::new("a\nb\nc");
    /// assert_eq!(index.lines_of(Span::new(0, 3)), 0..2);
    /// assert_eq!(index.lines_of(Span::empty(4)), 2..3);
    /// ```
    pub fn lines_of(&self, span: Span) -> Range<usize> {
        let first = self.line_of(span.start);
        let last = if span.is_empty() {
            first
        } else {
            self.line_of(span.end - 1).max(first)
        };
        first..last + 1
    }

    /// Line and character column of `offset` in `text`
    ///
    /// `text` must be the text this index was built from. Offsets inside a
    /// character snap down to its start.
    ///
    /// ```
    /// use redit_util::{LineCol, LineIndex};
    ///
    /// let text = "a\n\u{e9}t\u{e9}";
    /// let index = LineIndex::new(text);
    /// assert_eq!(index.line_col(text, 5), LineCol { line: 1, column: 2 });
    /// ```
    pub fn line_col(&self, text: &str, offset: usize) -> LineCol {
        debug_assert_eq!(text.len(), self.len);
        let offset = floor_char_boundary(text, offset);
        let line = self.line_of(offset);
        let start = self.line_starts[line];
        LineCol {
            line,
            column: text[start..offset].chars().count(),
        }
    }
}
