//! Scan entry points.
//!
//! [`scan`] is the plain function form: text, optional window, reserved
//! words in, lazy tokens out. [`Tokenizer`] binds a reserved-word set once
//! and is what long-lived callers hold on to. [`ScanRequest`] and
//! [`ScanResult`] are the collected, owned forms used when tokens have to
//! outlive the borrow of the text.

use redit_util::Span;

use crate::lexer::{clamp_window, Lexer};
use crate::reserved::ReservedWords;
use crate::token::Token;

/// Scans `window` of `text` (the whole text if `None`).
///
/// Never fails: an empty window yields no tokens, malformed constructs run
/// to the end of the window.
///
/// ```
/// use redit_lex::{scan, Category, ReservedWords};
///
/// let text = "\"unterminated";
/// let tokens: Vec<_> = scan(text, None, ReservedWords::r_language()).collect();
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].category, Category::DoubleQuotedString);
/// assert_eq!(tokens[0].span.end, text.len());
/// ```
pub fn scan<'a>(text: &'a str, window: Option<Span>, words: &'a ReservedWords) -> Lexer<'a> {
    match window {
        Some(window) => Lexer::with_window(text, window, words),
        None => Lexer::new(text, words),
    }
}

/// A tokenizer bound to one reserved-word set.
///
/// Holds no scanning state; every call starts from scratch, so the same
/// tokenizer can serve any number of documents and threads.
#[derive(Clone, Copy, Debug)]
pub struct Tokenizer<'w> {
    words: &'w ReservedWords,
}

impl Tokenizer<'static> {
    /// A tokenizer using the R reserved words.
    pub fn r_language() -> Self {
        Self::new(ReservedWords::r_language())
    }
}

impl Default for Tokenizer<'static> {
    fn default() -> Self {
        Self::r_language()
    }
}

impl<'w> Tokenizer<'w> {
    /// A tokenizer using `words`.
    pub fn new(words: &'w ReservedWords) -> Self {
        Self { words }
    }

    /// The reserved-word set in use.
    pub fn words(&self) -> &'w ReservedWords {
        self.words
    }

    /// Lazily scans all of `text`.
    pub fn tokens<'a>(&self, text: &'a str) -> Lexer<'a>
    where
        'w: 'a,
    {
        Lexer::new(text, self.words)
    }

    /// Lazily scans `window` of `text`.
    pub fn tokens_in<'a>(&self, text: &'a str, window: Span) -> Lexer<'a>
    where
        'w: 'a,
    {
        Lexer::with_window(text, window, self.words)
    }

    /// Scans `window` of `text` (the whole text if `None`) into an owned result.
    pub fn scan(&self, text: &str, window: Option<Span>) -> ScanResult {
        let lexer = scan(text, window, self.words);
        let covered = lexer.window();
        let tokens: Vec<Token> = lexer.collect();
        log::trace!("scanned {} tokens over {}", tokens.len(), covered);
        ScanResult::new(tokens, covered)
    }
}

/// Everything needed for one scan.
///
/// ```
/// use redit_lex::ScanRequest;
/// use redit_util::Span;
///
/// let result = ScanRequest::new("a <- b").with_window(Span::new(2, 4)).run();
/// assert_eq!(result.len(), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ScanRequest<'a> {
    /// Source text.
    pub text: &'a str,
    /// Region to scan; `None` for the whole text.
    pub window: Option<Span>,
    /// Reserved-word set.
    pub words: &'a ReservedWords,
}

impl<'a> ScanRequest<'a> {
    /// A whole-text request using the R reserved words.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            window: None,
            words: ReservedWords::r_language(),
        }
    }

    /// Limits the scan to `window`.
    pub fn with_window(mut self, window: Span) -> Self {
        self.window = Some(window);
        self
    }

    /// Uses `words` instead of the R reserved words.
    pub fn with_words(mut self, words: &'a ReservedWords) -> Self {
        self.words = words;
        self
    }

    /// The window that will actually be scanned, after clamping.
    pub fn resolved_window(&self) -> Span {
        clamp_window(self.text, self.window.unwrap_or(Span::new(0, self.text.len())))
    }

    /// Runs the scan.
    pub fn run(&self) -> ScanResult {
        Tokenizer::new(self.words).scan(self.text, self.window)
    }
}

/// Tokens produced by one scan and the range they cover.
///
/// `covered` is the region actually scanned. It can differ from what was
/// asked for: windows are clamped to the text, and incremental callers widen
/// the window back to a safe boundary before scanning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// The scanned range; the tokens tile it exactly.
    pub covered: Span,
}

impl ScanResult {
    /// Bundles tokens with the range they were scanned from.
    pub fn new(tokens: Vec<Token>, covered: Span) -> Self {
        debug_assert!(tiles(&tokens, covered));
        Self { tokens, covered }
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if nothing was scanned.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl IntoIterator for ScanResult {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'r> IntoIterator for &'r ScanResult {
    type Item = &'r Token;
    type IntoIter = std::slice::Iter<'r, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// True if `tokens` are non-empty, contiguous and exactly cover `covered`.
pub fn tiles(tokens: &[Token], covered: Span) -> bool {
    let mut at = covered.start;
    for token in tokens {
        if token.span.start != at || token.span.is_empty() {
            return false;
        }
        at = token.span.end;
    }
    at == covered.end
}
