//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its dispatch loop.

use std::iter::FusedIterator;

use redit_util::{floor_char_boundary, Span};

use crate::cursor::Cursor;
use crate::reserved::ReservedWords;
use crate::token::{Category, Token};
use crate::unicode::{is_ident_start, is_operator_char};

/// How many characters past the end of a token the lexer may inspect when
/// deciding where that token ends.
///
/// The longest case is an exponent: after `1` the lexer reads `e`, a sign and
/// a digit before it knows whether `1e+5` is one literal. `%op%` operators are
/// the exception; they may look ahead to the end of their line.
pub const MAX_LOOKAHEAD: usize = 4;

/// Lexer for R source text.
///
/// Scans a window of the source and yields a gapless, strictly increasing
/// sequence of [`Token`]s covering every character of the window. Spans are
/// offsets into the full source, not into the window. Text outside the window
/// is never read, so a construct that crosses the window end is cut there.
///
/// # Example
///
/// ```
/// use redit_lex::{Category, Lexer, ReservedWords};
///
/// let source = "x <- 1";
/// let categories: Vec<Category> = Lexer::new(source, ReservedWords::r_language())
///     .map(|token| token.category)
///     .collect();
/// assert_eq!(categories[2], Category::Other);
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Cursor over the window slice.
    pub(crate) cursor: Cursor<'a>,

    /// Words that turn a `Word` into a `ReservedWord`.
    pub(crate) words: &'a ReservedWords,

    /// The scanned window in source offsets.
    window: Span,

    /// Start of the token being scanned, relative to the window.
    pub(crate) token_start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over all of `source`.
    pub fn new(source: &'a str, words: &'a ReservedWords) -> Self {
        Self::with_window(source, Span::new(0, source.len()), words)
    }

    /// Creates a lexer over `window` of `source`.
    ///
    /// The window is clamped with [`clamp_window`].
    pub fn with_window(source: &'a str, window: Span, words: &'a ReservedWords) -> Self {
        let window = clamp_window(source, window);
        Self {
            cursor: Cursor::new(&source[window.range()]),
            words,
            window,
            token_start: 0,
        }
    }

    /// The window being scanned, after clamping.
    #[inline]
    pub fn window(&self) -> Span {
        self.window
    }

    /// Source offset of the next character to be scanned.
    #[inline]
    pub fn position(&self) -> usize {
        self.window.start + self.cursor.position()
    }

    /// Returns the next token, or `None` at the end of the window.
    ///
    /// Dispatch follows a fixed precedence: comment, double-quoted string,
    /// single-quoted string, backtick name, whitespace, number, name, other.
    /// Every branch consumes at least one character.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.cursor.is_at_end() {
            return None;
        }
        self.token_start = self.cursor.position();

        let category = match self.cursor.current_char() {
            '#' => self.lex_comment(),
            '"' => self.lex_quoted('"', Category::DoubleQuotedString),
            '\'' => self.lex_quoted('\'', Category::SingleQuotedString),
            '`' => self.lex_quoted('`', Category::BacktickQuotedIdentifier),
            c if c.is_whitespace() => self.lex_whitespace(),
            c if c.is_ascii_digit() => self.lex_number(),
            '.' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            '%' => self.lex_special_operator(),
            c if is_operator_char(c) => self.lex_operator(),
            _ => {
                self.cursor.advance();
                Category::Other
            },
        };

        let span = Span::new(
            self.window.start + self.token_start,
            self.window.start + self.cursor.position(),
        );
        debug_assert!(!span.is_empty());
        Some(Token::new(category, span))
    }

    /// Text of the token scanned so far.
    #[inline]
    pub(crate) fn token_text(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every token covers at least one byte.
        let remaining = self.cursor.rest().len();
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Lexer<'_> {}

/// Clamps `window` to `source` and snaps both ends down to char boundaries.
///
/// An inverted window collapses to an empty one at its end.
///
/// ```
/// use redit_lex::clamp_window;
/// use redit_util::Span;
///
/// assert_eq!(clamp_window("abc", Span::new(1, 99)), Span::new(1, 3));
/// assert_eq!(clamp_window("é", Span::new(1, 2)), Span::new(0, 2));
/// ```
pub fn clamp_window(source: &str, window: Span) -> Span {
    let end = floor_char_boundary(source, window.end);
    let start = floor_char_boundary(source, window.start.min(end));
    Span::new(start, end)
}
