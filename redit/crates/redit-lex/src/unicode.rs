//! Character classes for the R lexer.
//!
//! R names may use any letter the locale considers alphabetic, so the
//! identifier predicates are Unicode-aware. Operators and digits are ASCII.

/// Checks if a character can start a name.
///
/// Letters and `.` start a name. `_` and digits only continue one.
///
/// # Example
///
/// ```
/// use redit_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('x'));
/// assert!(is_ident_start('.'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '.' || c.is_alphabetic()
}

/// Checks if a character can continue a name.
///
/// # Example
///
/// ```
/// use redit_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('.'));
/// assert!(!is_ident_continue('-'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '.' || c == '_' || c.is_alphanumeric()
}

/// Checks if a character belongs to a run of operator symbols.
///
/// Runs of these form one token, so `<-`, `<<-`, `|>` and `::` stay whole.
/// `%` is handled separately because `%op%` operators enclose arbitrary text.
///
/// # Example
///
/// ```
/// use redit_lex::unicode::is_operator_char;
///
/// assert!(is_operator_char('<'));
/// assert!(is_operator_char('-'));
/// assert!(!is_operator_char('('));
/// assert!(!is_operator_char('%'));
/// ```
#[inline]
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '<' | '>' | '=' | '!' | '&' | '|' | '+' | '-'
            | '*' | '/' | '^' | '~' | ':' | '$' | '@' | '?'
    )
}
