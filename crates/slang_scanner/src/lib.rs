//! slang_scanner: Lexer for slang source text.
//!
//! Converts a complete source string into an ordered token list ending in
//! a single EOF token. Lexical faults never stop the scan: they are
//! collected as diagnostics and returned alongside the tokens.

mod char_codes;
mod scanner;

pub use scanner::{scan, ScanOutput, Scanner};
pub use slang_ast::{LiteralValue, Token, TokenKind};
