//! Highlighting session for one document.
//!
//! The [`Highlighter`] caches the token list of the document it last saw.
//! On every edit it plans a rescan, scans as little as it can and splices
//! the fresh tokens into the cache, so that the cache always equals a full
//! scan of the current text.

use std::fmt;
use std::ops::Range;

use redit_lex::{Lexer, ReservedWords, Token, Tokenizer};
use redit_util::{line_end, LineIndex, Span, TextEdit};

use crate::config::HighlightConfig;
use crate::error::ConfigResult;
use crate::plan::{plan_rescan, RescanPlan};
use crate::run::{styled_runs, StyledRun};
use crate::theme::Palette;

/// Sequence number of a highlighter update
///
/// Every update gets a larger revision than the one before it. A caller that
/// applies updates asynchronously drops any update whose revision is no
/// longer [current](Highlighter::is_current).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Revision(u64);

impl Revision {
    /// The revision before any update.
    pub const INITIAL: Revision = Revision(0);

    /// Numeric value of the revision.
    pub const fn get(self) -> u64 {
        self.0
    }

    fn next(self) -> Revision {
        Revision(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Result of one highlighter update
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightUpdate {
    /// Revision of this update.
    pub revision: Revision,
    /// How the text was rescanned; `None` when highlighting is disabled.
    pub plan: Option<RescanPlan>,
    /// Range of the new text whose tokens were recomputed.
    pub changed: Span,
    /// Styled runs covering `changed`.
    pub runs: Vec<StyledRun>,
}

impl HighlightUpdate {
    fn disabled(revision: Revision) -> Self {
        Self {
            revision,
            plan: None,
            changed: Span::DUMMY,
            runs: Vec::new(),
        }
    }

    /// True if nothing needs repainting.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Lines of the new text touched by the recomputed range.
    pub fn lines(&self, index: &LineIndex) -> Range<usize> {
        if self.is_empty() {
            return 0..0;
        }
        index.lines_of(self.changed)
    }
}

/// Incremental highlighter for a single document
///
/// # Example
///
/// ```
/// use redit_hl::{HighlightConfig, Highlighter};
/// use redit_util::TextEdit;
///
/// let mut highlighter = Highlighter::new(HighlightConfig::default()).unwrap();
/// let first = highlighter.reset("x <- 1");
/// assert!(highlighter.is_current(first.revision));
///
/// let second = highlighter.apply_edit("x <- 12", &TextEdit::insert(6, 1));
/// assert!(!highlighter.is_current(first.revision));
/// assert!(highlighter.is_current(second.revision));
/// assert_eq!(highlighter.tokens().len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Highlighter {
    config: HighlightConfig,
    words: ReservedWords,
    palette: Palette,

    /// Tokens of the last text seen, in order.
    tokens: Vec<Token>,

    /// Length of the text `tokens` were scanned from.
    len: usize,

    /// Whether `tokens` reflects the current text.
    cached: bool,

    revision: Revision,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self {
            config: HighlightConfig::default(),
            words: ReservedWords::r_language().clone(),
            palette: Palette::default(),
            tokens: Vec::new(),
            len: 0,
            cached: false,
            revision: Revision::INITIAL,
        }
    }
}

impl Highlighter {
    /// Create a highlighter from a configuration.
    ///
    /// # Errors
    ///
    /// Any error from [`HighlightConfig::validate`].
    pub fn new(config: HighlightConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            words: config.reserved_word_set(),
            palette: config.theme.resolve()?,
            config,
            ..Self::default()
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// The resolved colours.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The reserved-word set in use.
    pub fn words(&self) -> &ReservedWords {
        &self.words
    }

    /// Whether highlighting is on.
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Turn highlighting on or off.
    ///
    /// Turning it off drops the cached tokens, so the first update after
    /// turning it back on scans the whole document.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.config.enabled != enabled {
            log::debug!("syntax highlighting {}", if enabled { "enabled" } else { "disabled" });
        }
        self.config.enabled = enabled;
        if !enabled {
            self.invalidate();
        }
    }

    /// Revision of the latest update.
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// True if `revision` is the latest update.
    pub fn is_current(&self, revision: Revision) -> bool {
        self.revision == revision
    }

    /// Cached tokens of the current text.
    ///
    /// Empty while highlighting is disabled.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Styled runs for the whole current text.
    pub fn runs(&self) -> Vec<StyledRun> {
        styled_runs(&self.tokens, &self.palette)
    }

    /// Styled runs for the tokens intersecting `span`.
    pub fn runs_in(&self, span: Span) -> Vec<StyledRun> {
        let first = self.tokens.partition_point(|token| token.end() <= span.start);
        // an empty span still selects the token it sits in
        let end = span.end.max(span.start.saturating_add(1));
        let last = self.tokens.partition_point(|token| token.start() < end);
        styled_runs(&self.tokens[first..last.max(first)], &self.palette)
    }

    /// Forget the cached tokens.
    pub fn invalidate(&mut self) {
        self.tokens.clear();
        self.len = 0;
        self.cached = false;
    }

    /// How `edit` would be rescanned against the current cache.
    pub fn plan(&self, text: &str, edit: &TextEdit) -> RescanPlan {
        if !self.cached {
            return RescanPlan::Full;
        }
        plan_rescan(&self.config, &self.tokens, self.len, text, edit)
    }

    /// Scan `text` from scratch and replace the cache.
    pub fn reset(&mut self, text: &str) -> HighlightUpdate {
        self.revision = self.revision.next();
        if !self.is_enabled() {
            return HighlightUpdate::disabled(self.revision);
        }
        self.rescan_full(text)
    }

    /// Bring the cache up to date after `edit` produced `text`.
    ///
    /// An edit that does not fit the cached document is logged and handled
    /// with a full rescan.
    pub fn apply_edit(&mut self, text: &str, edit: &TextEdit) -> HighlightUpdate {
        self.revision = self.revision.next();
        if !self.is_enabled() {
            return HighlightUpdate::disabled(self.revision);
        }
        match self.plan(text, edit) {
            RescanPlan::Full => self.rescan_full(text),
            RescanPlan::Partial { from } => self.rescan_partial(text, edit, from),
        }
    }

    fn rescan_full(&mut self, text: &str) -> HighlightUpdate {
        let result = Tokenizer::new(&self.words).scan(text, None);
        self.tokens = result.tokens;
        self.len = text.len();
        self.cached = true;
        HighlightUpdate {
            revision: self.revision,
            plan: Some(RescanPlan::Full),
            changed: result.covered,
            runs: self.runs(),
        }
    }

    /// Scan from `from` until a token end lands on a shifted cached token
    /// start past the edited line, then reuse the cached tail.
    fn rescan_partial(&mut self, text: &str, edit: &TextEdit, from: usize) -> HighlightUpdate {
        let min_end = line_end(text, edit.new_span().end);
        let first = self.tokens.partition_point(|token| token.start() < from);

        let mut fresh = Vec::new();
        let mut resync = None;
        for token in Lexer::with_window(text, Span::new(from, text.len()), &self.words) {
            fresh.push(token);
            if token.end() < min_end || token.end() == text.len() {
                continue;
            }
            let Some(old) = edit.map_new_offset(token.end()) else {
                continue;
            };
            if let Ok(index) = self.tokens.binary_search_by_key(&old, Token::start) {
                resync = Some(index);
                break;
            }
        }

        let changed = Span::new(from, fresh.last().map_or(from, Token::end));
        let scanned = fresh.len();
        match resync {
            Some(index) => {
                let delta = edit.delta();
                for token in &mut self.tokens[index..] {
                    token.span = token.span.shift(delta);
                }
                self.tokens.splice(first..index, fresh);
            },
            None => {
                self.tokens.truncate(first);
                self.tokens.extend(fresh);
            },
        }
        self.len = text.len();

        log::trace!(
            "rescanned {} tokens over {}, resync {}",
            scanned,
            changed,
            if resync.is_some() { "found" } else { "at end of text" }
        );

        HighlightUpdate {
            revision: self.revision,
            plan: Some(RescanPlan::Partial { from }),
            changed,
            runs: self.runs_in(changed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Rgb, StyleSlot};
    use redit_lex::Category;

    fn highlighter(partial_threshold: usize) -> Highlighter {
        Highlighter::new(HighlightConfig {
            partial_threshold,
            ..HighlightConfig::default()
        })
        .unwrap()
    }

    fn full_scan(text: &str) -> Vec<Token> {
        Tokenizer::r_language().scan(text, None).tokens
    }

    /// Apply a replacement to `text` and feed it to the highlighter.
    fn edit(h: &mut Highlighter, text: &mut String, span: Span, with: &str) -> HighlightUpdate {
        text.replace_range(span.range(), with);
        h.apply_edit(text, &TextEdit::replace(span, with.len()))
    }

    #[test]
    fn test_reset_scans_everything() {
        let mut h = Highlighter::default();
        let update = h.reset("f <- function() NULL");
        assert_eq!(update.plan, Some(RescanPlan::Full));
        assert_eq!(update.changed, Span::new(0, 20));
        assert_eq!(h.tokens(), full_scan("f <- function() NULL").as_slice());
    }

    #[test]
    fn test_partial_edit_matches_full_scan() {
        let mut text = "a <- 1\nb <- 2\nc <- 3\nd <- 4\n".to_string();
        let mut h = highlighter(1);
        h.reset(&text);

        let update = edit(&mut h, &mut text, Span::new(12, 13), "22");
        assert_eq!(update.plan, Some(RescanPlan::Partial { from: 7 }));
        assert_eq!(h.tokens(), full_scan(&text).as_slice());
        // only the edited line was rescanned
        assert_eq!(update.changed, Span::new(7, 15));
    }

    #[test]
    fn test_opening_quote_rescans_to_end() {
        let mut text = "a <- 1\nb <- 2\nc <- 3\n".to_string();
        let mut h = highlighter(1);
        h.reset(&text);

        edit(&mut h, &mut text, Span::empty(12), "'");
        assert_eq!(h.tokens(), full_scan(&text).as_slice());
        let last = h.tokens().last().unwrap();
        assert_eq!(last.category, Category::SingleQuotedString);
        assert_eq!(last.end(), text.len());

        edit(&mut h, &mut text, Span::new(12, 13), "");
        assert_eq!(h.tokens(), full_scan(&text).as_slice());
    }

    #[test]
    fn test_percent_operator_on_previous_tokens() {
        let mut text = "x %in y\nz\n".to_string();
        let mut h = highlighter(1);
        h.reset(&text);
        edit(&mut h, &mut text, Span::empty(5), "%");
        assert_eq!(h.tokens(), full_scan(&text).as_slice());
        assert!(h.tokens().iter().any(|t| t.text(&text) == "%in%"));
    }

    #[test]
    fn test_exponent_completed_by_edit() {
        let mut text = "n <- 1e\nm\n".to_string();
        let mut h = highlighter(1);
        h.reset(&text);
        edit(&mut h, &mut text, Span::empty(7), "5");
        assert_eq!(h.tokens(), full_scan(&text).as_slice());
        assert!(h.tokens().iter().any(|t| t.text(&text) == "1e5"));
    }

    #[test]
    fn test_inconsistent_edit_falls_back_to_full() {
        let mut h = highlighter(1);
        h.reset("abc");
        let update = h.apply_edit("abcd", &TextEdit::insert(10, 1));
        assert_eq!(update.plan, Some(RescanPlan::Full));
        assert_eq!(h.tokens(), full_scan("abcd").as_slice());
    }

    #[test]
    fn test_disabled_updates_are_empty() {
        let mut h = Highlighter::default();
        h.reset("x <- 1");
        h.set_enabled(false);
        assert!(h.tokens().is_empty());

        let update = h.apply_edit("x <- 12", &TextEdit::insert(6, 1));
        assert!(update.is_empty());
        assert_eq!(update.plan, None);
        assert!(h.is_current(update.revision));

        h.set_enabled(true);
        let update = h.apply_edit("x <- 123", &TextEdit::insert(7, 1));
        assert_eq!(update.plan, Some(RescanPlan::Full));
        assert_eq!(h.tokens(), full_scan("x <- 123").as_slice());
    }

    #[test]
    fn test_revisions_increase() {
        let mut h = Highlighter::default();
        let a = h.reset("a");
        let b = h.apply_edit("ab", &TextEdit::insert(1, 1));
        assert!(b.revision > a.revision);
        assert!(!h.is_current(a.revision));
        assert_eq!(h.revision(), b.revision);
        assert_eq!(b.revision.to_string(), "r2");
    }

    #[test]
    fn test_update_lines() {
        let mut text = "a\nb\nc\n".to_string();
        let mut h = highlighter(1);
        h.reset(&text);
        let update = edit(&mut h, &mut text, Span::new(2, 3), "bb");
        let index = LineIndex::new(&text);
        // the boundary backs up past the start of the edited line
        assert_eq!(update.lines(&index), 0..2);
    }

    #[test]
    fn test_runs_in_selects_intersecting_tokens() {
        let mut h = Highlighter::default();
        h.reset("if (x) 1");
        let runs = h.runs_in(Span::new(4, 5));
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].span, Span::new(4, 5));
        assert_eq!(h.runs_in(Span::empty(0)).len(), 1);
    }

    #[test]
    fn test_custom_reserved_words() {
        let mut h = Highlighter::new(HighlightConfig {
            reserved_words: Some(vec!["foo".to_string()]),
            ..HighlightConfig::default()
        })
        .unwrap();
        h.reset("foo if");
        assert_eq!(h.tokens()[0].category, Category::ReservedWord);
        assert_eq!(h.tokens()[2].category, Category::Word);
    }

    #[test]
    fn test_accessors_reflect_config() {
        let config = HighlightConfig {
            max_lookback: 64,
            reserved_words: Some(vec!["foo".to_string()]),
            theme: crate::Theme {
                keyword: "#aa00aa".to_string(),
                ..crate::Theme::default()
            },
            ..HighlightConfig::default()
        };
        let h = Highlighter::new(config.clone()).unwrap();
        assert_eq!(h.config(), &config);
        assert_eq!(h.palette().color(StyleSlot::Keyword), Rgb::new(0xaa, 0x00, 0xaa));
        assert!(h.words().contains("foo"));
        assert!(!h.words().contains("if"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Highlighter::new(HighlightConfig {
            partial_threshold: 0,
            ..HighlightConfig::default()
        });
        assert!(result.is_err());
    }
}
