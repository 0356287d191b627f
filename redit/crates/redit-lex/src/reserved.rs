//! Reserved words.
//!
//! A [`ReservedWords`] set turns a scanned word into a
//! [`Category::ReservedWord`](crate::Category::ReservedWord) when its text
//! matches an entry exactly. Matching is case-sensitive: `TRUE` is reserved,
//! `True` is not.

use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

/// The reserved words of the R language.
pub const R_RESERVED_WORDS: &[&str] = &[
    "if",
    "else",
    "repeat",
    "while",
    "function",
    "for",
    "in",
    "next",
    "break",
    "TRUE",
    "FALSE",
    "NULL",
    "Inf",
    "NaN",
    "NA",
    "NA_integer_",
    "NA_real_",
    "NA_character_",
    "NA_complex_",
];

lazy_static! {
    static ref DEFAULT_RESERVED_WORDS: ReservedWords =
        R_RESERVED_WORDS.iter().copied().collect();
}

/// An immutable set of keywords.
///
/// # Example
///
/// ```
/// use redit_lex::ReservedWords;
///
/// let words: ReservedWords = ["foo", "bar"].into_iter().collect();
/// assert!(words.contains("foo"));
/// assert!(!words.contains("Foo"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReservedWords {
    words: FxHashSet<Box<str>>,
}

impl ReservedWords {
    /// The process-wide R keyword set, built on first use.
    pub fn r_language() -> &'static ReservedWords {
        &DEFAULT_RESERVED_WORDS
    }

    /// An empty set; every word stays a plain word.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True if `word` is an exact member.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the set has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| &**word)
    }
}

impl<S: Into<Box<str>>> FromIterator<S> for ReservedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
