//! Quoted string and backtick name lexing.

use crate::token::Category;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes text enclosed in `delimiter`, delimiters included.
    ///
    /// A backslash escapes whatever character follows it, so neither `\"`
    /// nor the second half of `\\` can close the literal. Quoted text may
    /// span lines. Without a closing delimiter the token runs to the end of
    /// the window.
    pub(crate) fn lex_quoted(&mut self, delimiter: char, category: Category) -> Category {
        self.cursor.advance();
        while !self.cursor.is_at_end() {
            match self.cursor.current_char() {
                '\\' => self.cursor.advance_n(2),
                c if c == delimiter => {
                    self.cursor.advance();
                    break;
                },
                _ => self.cursor.advance(),
            }
        }
        category
    }
}
