//! Comment and whitespace lexing.

use crate::token::Category;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `#` comment.
    ///
    /// The comment runs to the end of the line; the newline itself is left
    /// for the following whitespace token.
    pub(crate) fn lex_comment(&mut self) -> Category {
        self.cursor.eat_while(|c| c != '\n');
        Category::Comment
    }

    /// Lexes a maximal run of whitespace, newlines included.
    pub(crate) fn lex_whitespace(&mut self) -> Category {
        self.cursor.eat_while(char::is_whitespace);
        Category::Whitespace
    }
}

#[cfg(test)]
mod tests {
    use crate::{Category, Lexer, ReservedWords};

    fn lex(source: &str) -> Vec<(Category, &str)> {
        Lexer::new(source, ReservedWords::r_language())
            .map(|t| (t.category, t.text(source)))
            .collect()
    }

    #[test]
    fn test_comment_stops_before_newline() {
        assert_eq!(
            lex("# note\nx"),
            vec![
                (Category::Comment, "# note"),
                (Category::Whitespace, "\n"),
                (Category::Word, "x"),
            ]
        );
    }

    #[test]
    fn test_comment_hides_quotes() {
        assert_eq!(lex("# it's \"fine"), vec![(Category::Comment, "# it's \"fine")]);
    }

    #[test]
    fn test_trailing_comment() {
        let tokens = lex("f(x) # call");
        assert_eq!(tokens.last(), Some(&(Category::Comment, "# call")));
    }

    #[test]
    fn test_whitespace_run_spans_lines() {
        assert_eq!(lex(" \t\r\n  "), vec![(Category::Whitespace, " \t\r\n  ")]);
    }

    #[test]
    fn test_unicode_whitespace() {
        assert_eq!(lex("\u{a0}\u{2003}"), vec![(Category::Whitespace, "\u{a0}\u{2003}")]);
    }
}
