//! Operator and punctuation lexing.

use crate::token::Category;
use crate::unicode::is_operator_char;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a maximal run of operator characters.
    ///
    /// Handles: `<-`, `<<-`, `->`, `==`, `!=`, `&&`, `||`, `|>`, `::`, `:::`,
    /// `$`, `@`, `~`, `?` and any other run of the same symbols.
    pub(crate) fn lex_operator(&mut self) -> Category {
        self.cursor.eat_while(is_operator_char);
        Category::Other
    }

    /// Lexes an infix operator such as `%in%`, `%%` or `%>%`.
    ///
    /// The operator closes at the next `%` on the same line. Without one,
    /// the `%` stands alone.
    pub(crate) fn lex_special_operator(&mut self) -> Category {
        let rest = &self.cursor.rest()[1..];
        match rest.find(|c: char| c == '%' || c == '\n') {
            Some(at) if rest[at..].starts_with('%') => self.cursor.advance_bytes(at + 2),
            _ => self.cursor.advance(),
        }
        Category::Other
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
    fn test_assignment_operators() {
        for op in ["<-", "<<-", "->", "->>", "=", "=="] {
            assert_eq!(lex(op), vec![(Category::Other, op)], "{op}");
        }
    }

    #[test]
    fn test_namespace_and_pipe() {
        assert_eq!(
            lex("stats::sd |> f"),
            vec![
                (Category::Word, "stats"),
                (Category::Other, "::"),
                (Category::Word, "sd"),
                (Category::Whitespace, " "),
                (Category::Other, "|>"),
                (Category::Whitespace, " "),
                (Category::Word, "f"),
            ]
        );
    }

    #[test]
    fn test_brackets_are_single_tokens() {
        assert_eq!(
            lex("(([["),
            vec![
                (Category::Other, "("),
                (Category::Other, "("),
                (Category::Other, "["),
                (Category::Other, "["),
            ]
        );
    }

    #[test]
    fn test_special_operators() {
        assert_eq!(
            lex("x %in% y"),
            vec![
                (Category::Word, "x"),
                (Category::Whitespace, " "),
                (Category::Other, "%in%"),
                (Category::Whitespace, " "),
                (Category::Word, "y"),
            ]
        );
        assert_eq!(lex("%%"), vec![(Category::Other, "%%")]);
        assert_eq!(lex("%>%"), vec![(Category::Other, "%>%")]);
    }

    #[test]
    fn test_unclosed_percent_stands_alone() {
        assert_eq!(
            lex("5 %\n%"),
            vec![
                (Category::Numeric, "5"),
                (Category::Whitespace, " "),
                (Category::Other, "%"),
                (Category::Whitespace, "\n"),
                (Category::Other, "%"),
            ]
        );
    }

    #[test]
    fn test_lambda_backslash() {
        assert_eq!(
            lex("\\(x)"),
            vec![
                (Category::Other, "\\"),
                (Category::Other, "("),
                (Category::Word, "x"),
                (Category::Other, ")"),
            ]
        );
    }
}
