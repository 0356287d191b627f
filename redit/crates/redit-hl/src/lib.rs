//! redit-hl - Incremental Highlighting for R Source Text
//!
//! This crate sits between an editor and the `redit-lex` tokenizer. It
//! decides whether an edit needs a full or a partial rescan, keeps the token
//! list of one document up to date and turns tokens into styled runs through
//! a configurable colour theme.
//!
//! # Example Usage
//!
//! ```
//! use redit_hl::{HighlightConfig, Highlighter, StyleSlot};
//! use redit_util::{Span, TextEdit};
//!
//! let mut highlighter = Highlighter::new(HighlightConfig::default()).unwrap();
//! let mut text = String::from("total <- sum(x) # running total\n");
//! highlighter.reset(&text);
//!
//! text.replace_range(9..12, "mean");
//! let update = highlighter.apply_edit(&text, &TextEdit::replace(Span::new(9, 12), 4));
//!
//! assert!(highlighter.is_current(update.revision));
//! assert_eq!(update.runs.last().unwrap().style.slot, StyleSlot::Normal);
//! ```
//!
//! # Module Structure
//!
//! - [`config`] - `HighlightConfig`, loaded from TOML
//! - [`theme`] - Colour slots, `Theme` and resolved `Palette`
//! - [`plan`] - Full versus partial rescan decisions
//! - [`highlighter`] - The per-document `Highlighter` session
//! - [`run`] - Styled runs
//! - [`error`] - Configuration errors
//!
//! # Incremental Rescans
//!
//! Documents below `partial_threshold` bytes are rescanned in full on every
//! edit. Larger documents restart the scanner at a safe boundary before the
//! edited line, scan through the end of that line and stop as soon as the
//! scan lands on a cached token boundary again. The result is always the same
//! token list a full scan would produce.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod highlighter;
pub mod plan;
pub mod run;
pub mod theme;

pub use config::{HighlightConfig, DEFAULT_MAX_LOOKBACK, DEFAULT_PARTIAL_THRESHOLD};
pub use error::{ConfigError, ConfigResult};
pub use highlighter::{HighlightUpdate, Highlighter, Revision};
pub use plan::{plan_rescan, safe_boundary, RescanPlan};
pub use run::{styled_runs, Style, StyledRun};
pub use theme::{Palette, Rgb, StyleSlot, Theme};
