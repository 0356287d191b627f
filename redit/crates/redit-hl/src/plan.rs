//! Full or partial rescan decisions.
//!
//! A partial rescan restarts the scanner at a *safe boundary*: a cached
//! token start whose preceding tokens cannot have changed. Tokens look at
//! most [`MAX_LOOKAHEAD`] characters past their end, except `%` operators
//! which look to the end of their line, so a boundary that is both at or
//! before the start of the edited line and at least `MAX_LOOKAHEAD`
//! characters before the edit is safe.

use std::fmt;

use redit_lex::{Token, MAX_LOOKAHEAD};
use redit_util::{line_start, TextEdit};

use crate::config::HighlightConfig;

/// How an edit will be rescanned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RescanPlan {
    /// Scan the whole document again.
    Full,
    /// Scan from `from`, a cached token start, until the cache resyncs.
    Partial {
        /// Byte offset where scanning restarts.
        from: usize,
    },
}

impl RescanPlan {
    /// True for [`RescanPlan::Partial`].
    pub fn is_partial(&self) -> bool {
        matches!(self, RescanPlan::Partial { .. })
    }

    /// Offset where scanning starts.
    pub fn start(&self) -> usize {
        match *self {
            RescanPlan::Full => 0,
            RescanPlan::Partial { from } => from,
        }
    }
}

impl fmt::Display for RescanPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RescanPlan::Full => f.write_str("full"),
            RescanPlan::Partial { from } => write!(f, "partial from {from}"),
        }
    }
}

/// Decides how to rescan after `edit` turned a document of `old_len` bytes,
/// tokenized as `cached`, into `text`.
///
/// Returns [`RescanPlan::Full`] when the document is below the partial
/// threshold, when nothing is cached, when the edit does not fit the cached
/// document, or when the safe boundary lies more than `max_lookback` bytes
/// before the edited line.
///
/// ```
/// use redit_hl::{plan_rescan, HighlightConfig, RescanPlan};
/// use redit_lex::Tokenizer;
/// use redit_util::{Span, TextEdit};
///
/// let config = HighlightConfig { partial_threshold: 1, ..HighlightConfig::default() };
/// let old = "a <- 1\nb <- 2\n";
/// let cached = Tokenizer::r_language().scan(old, None).tokens;
///
/// let new = "a <- 1\nb <- 22\n";
/// let edit = TextEdit::insert(13, 1);
/// let plan = plan_rescan(&config, &cached, old.len(), new, &edit);
/// assert_eq!(plan, RescanPlan::Partial { from: 7 });
/// ```
pub fn plan_rescan(
    config: &HighlightConfig,
    cached: &[Token],
    old_len: usize,
    text: &str,
    edit: &TextEdit,
) -> RescanPlan {
    if text.len() < config.partial_threshold {
        log::debug!(
            "full rescan: {} bytes is below the partial threshold of {}",
            text.len(),
            config.partial_threshold
        );
        return RescanPlan::Full;
    }
    if cached.is_empty() {
        log::debug!("full rescan: no cached tokens");
        return RescanPlan::Full;
    }
    if let Err(err) = edit.validate(old_len, text) {
        log::warn!("full rescan: edit does not fit the cached document: {}", err);
        return RescanPlan::Full;
    }

    let line = line_start(text, edit.start);
    let from = safe_boundary(cached, text, edit.start);
    if line - from > config.max_lookback {
        log::debug!(
            "full rescan: safe boundary {} is {} bytes before the edited line",
            from,
            line - from
        );
        return RescanPlan::Full;
    }

    log::debug!("partial rescan from {} for edit at {}", from, edit.start);
    RescanPlan::Partial { from }
}

/// Latest cached token start that is safe to restart scanning from for an
/// edit at `edit_start`, or 0 if there is none.
///
/// `text` only needs to agree with the cached document before `edit_start`.
pub fn safe_boundary(cached: &[Token], text: &str, edit_start: usize) -> usize {
    let limit = line_start(text, edit_start).min(chars_before(text, edit_start, MAX_LOOKAHEAD));
    let after = cached.partition_point(|token| token.start() <= limit);
    match after.checked_sub(1) {
        Some(index) => cached[index].start(),
        None => 0,
    }
}

/// Byte offset `count` characters before `offset`, or 0 if there are fewer.
fn chars_before(text: &str, offset: usize, count: usize) -> usize {
    if count == 0 {
        return offset;
    }
    text.get(..offset)
        .and_then(|prefix| prefix.char_indices().rev().nth(count - 1))
        .map_or(0, |(at, _)| at)
}
