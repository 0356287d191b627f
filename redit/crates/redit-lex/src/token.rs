//! Token definitions.
//!
//! A [`Token`] is a [`Category`] plus the [`Span`] it covers. Tokens never
//! carry text; use [`Token::text`] with the scanned source to look it up.

use std::fmt;

use redit_util::Span;

/// Lexical category assigned to a token.
///
/// The discriminants are stable codes (1 through 10) so they can be stored
/// or exchanged with presentation layers that key their styles by number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    /// `"..."`, delimiters included.
    DoubleQuotedString = 1,
    /// `'...'`, delimiters included.
    SingleQuotedString = 2,
    /// `# ...` up to (not including) the end of the line.
    Comment = 3,
    /// `` `...` ``, a quoted name.
    BacktickQuotedIdentifier = 4,
    /// A word found in the reserved-word set.
    ReservedWord = 5,
    /// A maximal run of whitespace, newlines included.
    Whitespace = 6,
    /// Integer, double, hexadecimal or imaginary literal.
    Numeric = 7,
    /// Variadic argument reference: `...`, `..1`, `..2`, ...
    Variable = 8,
    /// Any other identifier.
    Word = 9,
    /// Operators, brackets, separators and anything unrecognised.
    Other = 10,
}

impl Category {
    /// Every category, in code order.
    pub const ALL: [Category; 10] = [
        Category::DoubleQuotedString,
        Category::SingleQuotedString,
        Category::Comment,
        Category::BacktickQuotedIdentifier,
        Category::ReservedWord,
        Category::Whitespace,
        Category::Numeric,
        Category::Variable,
        Category::Word,
        Category::Other,
    ];

    /// Stable numeric code of this category.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks a category up by its numeric code.
    ///
    /// ```
    /// use redit_lex::Category;
    ///
    /// assert_eq!(Category::from_code(3), Some(Category::Comment));
    /// assert_eq!(Category::from_code(0), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code).checked_sub(1)?).copied()
    }

    /// Stable snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Category::DoubleQuotedString => "double_quoted_string",
            Category::SingleQuotedString => "single_quoted_string",
            Category::Comment => "comment",
            Category::BacktickQuotedIdentifier => "backtick_quoted_identifier",
            Category::ReservedWord => "reserved_word",
            Category::Whitespace => "whitespace",
            Category::Numeric => "numeric",
            Category::Variable => "variable",
            Category::Word => "word",
            Category::Other => "other",
        }
    }

    /// True for the two string literal categories.
    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(
            self,
            Category::DoubleQuotedString | Category::SingleQuotedString
        )
    }

    /// True for categories closed by a matching delimiter.
    #[inline]
    pub const fn is_quoted(self) -> bool {
        self.is_string() || matches!(self, Category::BacktickQuotedIdentifier)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified range of source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What kind of text the span holds.
    pub category: Category,
    /// The half-open byte range covered.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    #[inline]
    pub const fn new(category: Category, span: Span) -> Self {
        Self { category, span }
    }

    /// Start byte offset.
    #[inline]
    pub const fn start(&self) -> usize {
        self.span.start
    }

    /// End byte offset (exclusive).
    #[inline]
    pub const fn end(&self) -> usize {
        self.span.end
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.span.len()
    }

    /// Always false for tokens produced by the lexer.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// The slice of `source` this token covers.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.category, self.span)
    }
}
