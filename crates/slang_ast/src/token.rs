//! Token information produced by the scanner.

use crate::token_kind::TokenKind;
use serde::Serialize;
use slang_core::text::TextRange;
use std::fmt;

/// The value carried by a string or number token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// The exact text between the quotes; escapes are not interpreted.
    Str(String),
    Number(f64),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Str(s) => f.write_str(s),
            LiteralValue::Number(n) => write!(f, "{:?}", n),
        }
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The source text matched for this token.
    pub lexeme: String,
    pub literal: Option<LiteralValue>,
    /// 1-based line of the token's first character.
    pub line: u32,
    /// Byte range of the lexeme in the source.
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, range: TextRange) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
            range,
        }
    }

    pub fn with_literal(mut self, literal: LiteralValue) -> Self {
        self.literal = Some(literal);
        self
    }

    /// The end-of-input sentinel.
    pub fn eof(line: u32, pos: u32) -> Self {
        Self::new(TokenKind::Eof, "", line, TextRange::empty(pos))
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The numeric value of a NUMBER token.
    pub fn number(&self) -> Option<f64> {
        match self.literal {
            Some(LiteralValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// The text value of a STRING token.
    pub fn string(&self) -> Option<&str> {
        match &self.literal {
            Some(LiteralValue::Str(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(literal) => write!(f, "{}", literal),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let plus = Token::new(TokenKind::Plus, "+", 1, TextRange::new(1, 2));
        assert_eq!(plus.to_string(), "PLUS + null");

        let num = Token::new(TokenKind::Number, "12", 1, TextRange::new(0, 2))
            .with_literal(LiteralValue::Number(12.0));
        assert_eq!(num.to_string(), "NUMBER 12 12.0");
        assert_eq!(num.number(), Some(12.0));

        let s = Token::new(TokenKind::String, "\"hi\"", 2, TextRange::new(3, 7))
            .with_literal(LiteralValue::Str("hi".to_string()));
        assert_eq!(s.to_string(), "STRING \"hi\" hi");
        assert_eq!(s.string(), Some("hi"));
    }

    #[test]
    fn test_eof_token() {
        let eof = Token::eof(4, 10);
        assert!(eof.is_eof());
        assert!(eof.lexeme.is_empty());
        assert!(eof.range.is_empty());
        assert_eq!(eof.to_string(), "EOF  null");
    }

    #[test]
    fn test_token_serializes_to_json() {
        let num = Token::new(TokenKind::Number, "1.5", 3, TextRange::new(4, 7))
            .with_literal(LiteralValue::Number(1.5));
        let json = serde_json::to_value(&num).unwrap();
        assert_eq!(json["kind"], "NUMBER");
        assert_eq!(json["lexeme"], "1.5");
        assert_eq!(json["literal"], 1.5);
        assert_eq!(json["line"], 3);
        assert_eq!(json["range"]["pos"], 4);

        let bang = Token::new(TokenKind::BangEqual, "!=", 1, TextRange::new(0, 2));
        let json = serde_json::to_value(&bang).unwrap();
        assert_eq!(json["kind"], "BANG_EQUAL");
        assert!(json["literal"].is_null());
    }
}
