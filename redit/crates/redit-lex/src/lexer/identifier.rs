//! Name lexing.
//!
//! Names are scanned first and classified afterwards, so a reserved word is
//! only recognised once the whole name is known: `iffy` is a word, never
//! `if` followed by `fy`.

use crate::reserved::ReservedWords;
use crate::token::Category;
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a name and classifies it with [`classify_word`].
    pub(crate) fn lex_identifier(&mut self) -> Category {
        self.cursor.eat_while(is_ident_continue);
        classify_word(self.token_text(), self.words)
    }
}

/// Classifies a complete name.
///
/// Exact members of `words` are reserved words. Otherwise the variadic
/// references `...`, `..1`, `..2`, ... are variables, and everything else is
/// a plain word.
///
/// ```
/// use redit_lex::{classify_word, Category, ReservedWords};
///
/// let words = ReservedWords::r_language();
/// assert_eq!(classify_word("function", words), Category::ReservedWord);
/// assert_eq!(classify_word("..2", words), Category::Variable);
/// assert_eq!(classify_word("mean", words), Category::Word);
/// ```
pub fn classify_word(text: &str, words: &ReservedWords) -> Category {
    if words.contains(text) {
        Category::ReservedWord
    } else if is_variadic_reference(text) {
        Category::Variable
    } else {
        Category::Word
    }
}

fn is_variadic_reference(text: &str) -> bool {
    match text.strip_prefix("..") {
        Some(".") => true,
        Some(index) => !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<(Category, &str)> {
        Lexer::new(source, ReservedWords::r_language())
            .map(|t| (t.category, t.text(source)))
            .collect()
    }

    #[test]
    fn test_simple_word() {
        assert_eq!(lex("foo"), vec![(Category::Word, "foo")]);
    }

    #[test]
    fn test_dotted_and_underscored_names() {
        assert_eq!(lex("is.na"), vec![(Category::Word, "is.na")]);
        assert_eq!(lex("my_var2"), vec![(Category::Word, "my_var2")]);
        assert_eq!(lex(".hidden"), vec![(Category::Word, ".hidden")]);
    }

    #[test]
    fn test_reserved_words() {
        for word in ["if", "else", "function", "TRUE", "NULL", "NA_real_", "in"] {
            assert_eq!(lex(word), vec![(Category::ReservedWord, word)]);
        }
    }

    #[test]
    fn test_reserved_prefix_is_word() {
        assert_eq!(lex("iffy"), vec![(Category::Word, "iffy")]);
        assert_eq!(lex("TRUEx"), vec![(Category::Word, "TRUEx")]);
        assert_eq!(lex("NA."), vec![(Category::Word, "NA.")]);
    }

    #[test]
    fn test_variadic_references() {
        assert_eq!(lex("..."), vec![(Category::Variable, "...")]);
        assert_eq!(lex("..1"), vec![(Category::Variable, "..1")]);
        assert_eq!(lex("..12"), vec![(Category::Variable, "..12")]);
    }

    #[test]
    fn test_near_variadic_names_are_words() {
        assert_eq!(lex(".."), vec![(Category::Word, "..")]);
        assert_eq!(lex("...x"), vec![(Category::Word, "...x")]);
        assert_eq!(lex("..1a"), vec![(Category::Word, "..1a")]);
    }

    #[test]
    fn test_underscore_cannot_start_name() {
        assert_eq!(lex("_x"), vec![(Category::Other, "_"), (Category::Word, "x")]);
    }

    #[test]
    fn test_unicode_name() {
        assert_eq!(lex("größe"), vec![(Category::Word, "größe")]);
    }

    #[test]
    fn test_custom_reserved_words() {
        let words: ReservedWords = ["foo"].into_iter().collect();
        assert_eq!(classify_word("foo", &words), Category::ReservedWord);
        assert_eq!(classify_word("if", &words), Category::Word);
    }

    #[test]
    fn test_reserved_set_overrides_variadic() {
        let words: ReservedWords = ["..."].into_iter().collect();
        assert_eq!(classify_word("...", &words), Category::ReservedWord);
    }
}
