//! redit-lex - Syntax-Highlighting Lexer for R Source Text
//!
//! This crate classifies every character of R source text into one of ten
//! lexical categories so an editor can colour it. It is a highlighting
//! lexer, not a compiler front end: it never fails, never allocates per
//! token, and covers every byte it is asked to scan.
//!
//! # Example Usage
//!
//! ```
//! use redit_lex::{Category, Tokenizer};
//!
//! let source = "# comment\nx <- 1.5e3";
//! let tokenizer = Tokenizer::r_language();
//!
//! let classified: Vec<(Category, &str)> = tokenizer
//!     .tokens(source)
//!     .map(|token| (token.category, token.text(source)))
//!     .collect();
//!
//! assert_eq!(classified[0], (Category::Comment, "# comment"));
//! assert_eq!(classified[4], (Category::Other, "<-"));
//! assert_eq!(classified[6], (Category::Numeric, "1.5e3"));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Categories and tokens
//! - [`reserved`] - Reserved-word sets
//! - [`lexer`] - The scanner
//! - [`scan`] - Entry points and owned scan results
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes
//!
//! # Token Categories
//!
//! | Category | Examples |
//! |----------|----------|
//! | `DoubleQuotedString` | `"a\"b"` |
//! | `SingleQuotedString` | `'it'` |
//! | `Comment` | `# note` |
//! | `BacktickQuotedIdentifier` | `` `my var` `` |
//! | `ReservedWord` | `if`, `function`, `TRUE`, `NA_real_` |
//! | `Whitespace` | spaces, tabs, newlines |
//! | `Numeric` | `42`, `1.5e3`, `0xFF`, `10L`, `2i` |
//! | `Variable` | `...`, `..1` |
//! | `Word` | `mean`, `is.na`, `.x` |
//! | `Other` | `<-`, `%in%`, `(`, `,` |
//!
//! # Guarantees
//!
//! - Tokens tile the scanned window: contiguous, non-empty, in order.
//! - Unterminated strings and names run to the end of the window.
//! - Scanning is deterministic and holds no state between calls.
//! - A token's extent depends on at most [`MAX_LOOKAHEAD`] characters after
//!   it, except `%op%` operators which look to the end of their line. The
//!   incremental highlighter relies on this bound when picking safe
//!   boundaries.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod lexer;
pub mod reserved;
pub mod scan;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::{clamp_window, classify_word, Lexer, MAX_LOOKAHEAD};
pub use reserved::{ReservedWords, R_RESERVED_WORDS};
pub use scan::{scan, tiles, ScanRequest, ScanResult, Tokenizer};
pub use token::{Category, Token};
