//! Edge case tests for redit-lex
