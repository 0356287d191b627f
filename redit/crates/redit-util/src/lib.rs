//! redit-util - Text Positions and Edits
//!
//! Foundation types shared by the tokenizer and the highlighter:
//!
//! - [`Span`] - a half-open byte range into UTF-8 text
//! - [`TextEdit`] - a single replace operation, used to map old offsets to new ones
//! - [`LineIndex`] - precomputed line starts for line/column lookups
//! - line helpers ([`line_start`], [`line_end`]) and char-boundary snapping
//!
//! All offsets are byte offsets that fall on `char` boundaries. Presentation
//! layers that address text by character can convert with
//! [`Span::char_range`].
//!
//! # Examples
//!
//! ```
//! use redit_util::{Span, TextEdit};
//!
//! let span = Span::new(2, 4);
//! assert_eq!(span.text("x <- 1"), "<-");
//!
//! // "ab" inserted at offset 1 shifts everything after it
//! let edit = TextEdit::insert(1, 2);
//! assert_eq!(edit.map_old_offset(4), Some(6));
//! ```

#![warn(missing_docs)]

pub mod edit;
pub mod error;
pub mod span;

pub use edit::TextEdit;
pub use error::{EditError, EditResult};
pub use span::{floor_char_boundary, line_end, line_start, LineCol, LineIndex, Span};
