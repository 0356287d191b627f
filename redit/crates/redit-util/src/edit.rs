//! Text edits.
//!
//! A [`TextEdit`] describes one replace operation on a buffer: `removed`
//! bytes starting at `start` were replaced by `inserted` bytes. Insertions
//! and deletions are the special cases with `removed == 0` and
//! `inserted == 0`.
//!
//! The edit carries no text, only lengths; it is used to translate offsets
//! recorded against the old buffer into offsets in the new one.

use crate::error::{EditError, EditResult};
use crate::span::Span;

/// A single replace operation on a text buffer
///
/// # Examples
///
/// ```
/// use redit_util::{Span, TextEdit};
///
/// // "x <- 1" becomes "x <- 10"
/// let edit = TextEdit::insert(6, 1);
/// assert_eq!(edit.old_span(), Span::new(6, 6));
/// assert_eq!(edit.new_span(), Span::new(6, 7));
/// assert_eq!(edit.delta(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextEdit {
    /// Offset where the edit starts (same in old and new text)
    pub start: usize,
    /// Number of bytes removed from the old text
    pub removed: usize,
    /// Number of bytes inserted into the new text
    pub inserted: usize,
}

impl TextEdit {
    /// Replace the bytes of `old` with `inserted` new bytes
    #[inline]
    pub const fn replace(old: Span, inserted: usize) -> Self {
        Self {
            start: old.start,
            removed: old.end - old.start,
            inserted,
        }
    }

    /// Insert `len` bytes at `at`
    #[inline]
    pub const fn insert(at: usize, len: usize) -> Self {
        Self {
            start: at,
            removed: 0,
            inserted: len,
        }
    }

    /// Delete the bytes covered by `span`
    #[inline]
    pub const fn delete(span: Span) -> Self {
        Self::replace(span, 0)
    }

    /// The replaced range in the old text
    #[inline]
    pub const fn old_span(&self) -> Span {
        Span::new(self.start, self.start + self.removed)
    }

    /// The inserted range in the new text
    #[inline]
    pub const fn new_span(&self) -> Span {
        Span::new(self.start, self.start + self.inserted)
    }

    /// Change in document length
    #[inline]
    pub const fn delta(&self) -> isize {
        self.inserted as isize - self.removed as isize
    }

    /// Translate an offset in the old text to the new text
    ///
    /// Offsets before the edit are unchanged, offsets after it move by
    /// [`delta`](Self::delta). Offsets strictly inside the replaced range
    /// have no counterpart and map to `None`.
    ///
    /// ```
    /// use redit_util::{Span, TextEdit};
    ///
    /// let edit = TextEdit::replace(Span::new(2, 5), 1);
    /// assert_eq!(edit.map_old_offset(2), Some(2));
    /// assert_eq!(edit.map_old_offset(3), None);
    /// assert_eq!(edit.map_old_offset(9), Some(7));
    /// ```
    pub fn map_old_offset(&self, offset: usize) -> Option<usize> {
        let old_end = self.start + self.removed;
        if offset <= self.start {
            Some(offset)
        } else if offset >= old_end {
            Some(offset - self.removed + self.inserted)
        } else {
            None
        }
    }

    /// Translate an offset in the new text back to the old text
    ///
    /// The inverse of [`map_old_offset`](Self::map_old_offset); offsets inside
    /// the inserted range map to `None`.
    pub fn map_new_offset(&self, offset: usize) -> Option<usize> {
        let new_end = self.start + self.inserted;
        if offset <= self.start {
            Some(offset)
        } else if offset >= new_end {
            Some(offset - self.inserted + self.removed)
        } else {
            None
        }
    }

    /// Check that the edit turns a text of `old_len` bytes into `new_text`
    ///
    /// # Errors
    ///
    /// - [`EditError::OutOfBounds`] if the replaced range ends past `old_len`
    /// - [`EditError::LengthMismatch`] if the lengths do not add up
    /// - [`EditError::NotCharBoundary`] if the inserted range splits a character
    pub fn validate(&self, old_len: usize, new_text: &str) -> EditResult<()> {
        let out_of_bounds = EditError::OutOfBounds {
            start: self.start,
            removed: self.removed,
            old_len,
        };
        let old_end = self.start.checked_add(self.removed).ok_or(out_of_bounds.clone())?;
        if old_end > old_len {
            return Err(out_of_bounds);
        }

        let expected = (old_len - self.removed)
            .checked_add(self.inserted)
            .ok_or(out_of_bounds)?;
        if expected != new_text.len() {
            return Err(EditError::LengthMismatch {
                expected,
                actual: new_text.len(),
            });
        }

        let new_end = self.start + self.inserted;
        for offset in [self.start, new_end] {
            if !new_text.is_char_boundary(offset) {
                return Err(EditError::NotCharBoundary { offset });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_delete_spans() {
        let edit = TextEdit::delete(Span::new(3, 8));
        assert_eq!(edit.old_span(), Span::new(3, 8));
        assert!(edit.new_span().is_empty());
        assert_eq!(edit.delta(), -5);
    }

    #[test]
    fn test_validate_accepts_matching_lengths() {
        // "ab" -> "aXYb"
        assert_eq!(TextEdit::insert(1, 2).validate(2, "aXYb"), Ok(()));
    }

    #[test]
    fn test_validate_out_of_bounds() {
        let err = TextEdit::delete(Span::new(4, 9)).validate(6, "abcd").unwrap_err();
        assert!(matches!(err, EditError::OutOfBounds { old_len: 6, .. }));
    }

    #[test]
    fn test_validate_length_mismatch() {
        let err = TextEdit::insert(0, 1).validate(3, "abc").unwrap_err();
        assert_eq!(
            err,
            EditError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_validate_char_boundary() {
        // 'é' is two bytes; claiming a one-byte insert splits it
        let err = TextEdit::insert(0, 1).validate(1, "é").unwrap_err();
        assert_eq!(err, EditError::NotCharBoundary { offset: 1 });
    }

    #[test]
    fn test_validate_overflow_is_out_of_bounds() {
        let err = TextEdit {
            start: usize::MAX,
            removed: 2,
            inserted: 0,
        }
        .validate(0, "")
        .unwrap_err();
        assert!(matches!(err, EditError::OutOfBounds { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = EditError::NotCharBoundary { offset: 3 };
        assert_eq!(err.to_string(), "edit endpoint 3 is not on a char boundary");
    }

    #[quickcheck]
    fn prop_map_round_trips_outside_edit(
        start: u8,
        removed: u8,
        inserted: u8,
        offset: u16,
    ) -> bool {
        let edit = TextEdit {
            start: start as usize,
            removed: removed as usize,
            inserted: inserted as usize,
        };
        let offset = offset as usize;
        // Inside the replaced range, or at the old end of a pure deletion, there is no inverse.
        if offset > edit.start && offset <= edit.old_span().end {
            return true;
        }
        match edit.map_old_offset(offset) {
            Some(new) => edit.map_new_offset(new) == Some(offset),
            None => false,
        }
    }
}
