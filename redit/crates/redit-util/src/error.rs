//! Core error types for redit-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for edits that do not fit the text they are applied to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The replaced range ends past the end of the old text
    #[error("edit {start}+{removed} is out of bounds for text of {old_len} bytes")]
    OutOfBounds {
        /// Start of the edit
        start: usize,
        /// Number of bytes removed
        removed: usize,
        /// Length of the text before the edit
        old_len: usize,
    },

    /// Old length, removed and inserted byte counts disagree with the new text
    #[error("edit expects {expected} bytes after applying, text has {actual}")]
    LengthMismatch {
        /// Length implied by the edit
        expected: usize,
        /// Length of the text handed in
        actual: usize,
    },

    /// An edit endpoint splits a multi-byte character
    #[error("edit endpoint {offset} is not on a char boundary")]
    NotCharBoundary {
        /// The offending offset in the new text
        offset: usize,
    },
}

/// Result type alias for edit operations
pub type EditResult<T> = std::result::Result<T, EditError>;
