//! Styled runs: token ranges with their resolved colours.

use redit_lex::Token;
use redit_util::Span;

use crate::theme::{Palette, Rgb, StyleSlot};

/// Presentation attributes applied to a range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    /// Slot the colour came from
    pub slot: StyleSlot,
    /// Foreground colour
    pub color: Rgb,
}

/// A range of text sharing one style
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyledRun {
    /// Byte range in the document
    pub span: Span,
    /// Style to apply
    pub style: Style,
}

/// Map tokens to styled runs, merging neighbours that share a style
///
/// Tokens must be in order and contiguous, as the scanner produces them.
///
/// ```
/// use redit_hl::{styled_runs, Palette, StyleSlot};
/// use redit_lex::Tokenizer;
///
/// let text = "x <- y # done";
/// let tokens = Tokenizer::r_language().scan(text, None).tokens;
/// let runs = styled_runs(&tokens, &Palette::default());
///
/// // "x <- y " is all normal text
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].span.text(text), "x <- y ");
/// assert_eq!(runs[1].style.slot, StyleSlot::Comment);
/// ```
pub fn styled_runs<'t>(
    tokens: impl IntoIterator<Item = &'t Token>,
    palette: &Palette,
) -> Vec<StyledRun> {
    let mut runs: Vec<StyledRun> = Vec::new();
    for token in tokens {
        let slot = StyleSlot::for_category(token.category);
        let style = Style {
            slot,
            color: palette.color(slot),
        };
        match runs.last_mut() {
            Some(last) if last.style == style && last.span.end == token.start() => {
                last.span.end = token.end();
            },
            _ => runs.push(StyledRun {
                span: token.span,
                style,
            }),
        }
    }
    runs
}
