//! Lexer module.
//!
//! The lexer implementation is split by token class:
//! - `core` - Lexer struct, window handling and dispatch
//! - `comment` - Comments and whitespace runs
//! - `string` - Quoted strings and backtick names
//! - `number` - Numeric literals
//! - `identifier` - Names, reserved words and variadic references
//! - `operator` - Operators and punctuation

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{clamp_window, Lexer, MAX_LOOKAHEAD};
pub use identifier::classify_word;
