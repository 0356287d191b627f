//! Numeric literal lexing.

use crate::token::Category;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal.
    ///
    /// # Number Formats
    ///
    /// - Integer and double: `42`, `3.14`, `.5`, `1.`
    /// - Exponent: `1e10`, `2.5e-3`, `1E+2`
    /// - Hexadecimal: `0xFF`, `0X1a`
    /// - Suffixes: `10L` (integer), `2i` (imaginary)
    ///
    /// Malformed tails are not consumed: `1e` stops after `1`, leaving `e`
    /// for the next token, and `0x` without hex digits stops after `0`.
    pub(crate) fn lex_number(&mut self) -> Category {
        let is_hex = self.cursor.current_char() == '0'
            && matches!(self.cursor.peek_char(1), 'x' | 'X')
            && self.cursor.peek_char(2).is_ascii_hexdigit();

        if is_hex {
            self.cursor.advance_n(2);
            self.cursor.eat_while(|c| c.is_ascii_hexdigit());
        } else {
            self.cursor.eat_while(|c| c.is_ascii_digit());
            if self.cursor.match_char('.') {
                self.cursor.eat_while(|c| c.is_ascii_digit());
            }
            self.lex_exponent();
        }

        if matches!(self.cursor.current_char(), 'L' | 'i') {
            self.cursor.advance();
        }
        Category::Numeric
    }

    /// Consumes `e`/`E`, an optional sign and the exponent digits.
    ///
    /// Nothing is consumed unless at least one digit follows.
    fn lex_exponent(&mut self) {
        if !matches!(self.cursor.current_char(), 'e' | 'E') {
            return;
        }
        let digits_at = if matches!(self.cursor.peek_char(1), '+' | '-') {
            2
        } else {
            1
        };
        if self.cursor.peek_char(digits_at).is_ascii_digit() {
            self.cursor.advance_n(digits_at);
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }
    }
}
