//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which maintains the position
//! while walking through a source slice. Positions are byte offsets relative
//! to the start of the slice and always sit on `char` boundaries.

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use redit_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x <- 1");
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// Window slice being scanned.
    source: &'a str,

    /// Byte offset of the next unread character.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the unread remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// True once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    ///
    /// A literal NUL in the text also reads as `'\0'`; callers that must
    /// tell the two apart check [`is_at_end`](Self::is_at_end).
    #[inline]
    pub fn current_char(&self) -> char {
        // ASCII fast path
        match self.source.as_bytes().get(self.position) {
            None => '\0',
            Some(&b) if b < 128 => b as char,
            Some(_) => self.rest().chars().next().unwrap_or('\0'),
        }
    }

    /// Returns the character `offset` characters ahead (0 = current).
    ///
    /// ```
    /// use redit_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1e-5");
    /// assert_eq!(cursor.peek_char(2), '-');
    /// assert_eq!(cursor.peek_char(9), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        if offset == 0 {
            return self.current_char();
        }
        self.rest().chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(&b) = self.source.as_bytes().get(self.position) else {
            return;
        };
        if b < 128 {
            self.position += 1;
        } else if let Some(c) = self.rest().chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances by `count` bytes, clamped to the end of the source.
    ///
    /// The caller must land on a char boundary, which holds whenever the
    /// count was measured on [`rest`](Self::rest) with `str` searching.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        self.position = (self.position + count).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(self.position));
    }

    /// Consumes characters while `predicate` holds.
    ///
    /// ```
    /// use redit_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.position(), 3);
    /// ```
    #[inline]
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        let rest = self.rest();
        let len = rest.find(|c: char| !predicate(c)).unwrap_or(rest.len());
        self.position += len;
    }

    /// Consumes `expected` if it is the current character.
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the source text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
