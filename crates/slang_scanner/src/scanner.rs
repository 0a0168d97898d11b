//! The slang scanner.
//!
//! Each step marks the start of a lexeme, consumes one character, and
//! dispatches on it. Comments, strings, numbers and identifiers consume
//! further characters before control returns to the dispatch loop.

use crate::char_codes::*;
use slang_ast::{LiteralValue, Token, TokenKind};
use slang_core::text::{TextPos, TextRange};
use slang_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// The result of a full scan: every token plus every lexical fault found.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    /// Tokens in source order, always ending with exactly one EOF token.
    pub tokens: Vec<Token>,
    pub diagnostics: DiagnosticCollection,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Scan `source` to completion.
pub fn scan(source: &str) -> ScanOutput {
    Scanner::new(source).scan_tokens()
}

/// The scanner converts slang source text into tokens.
///
/// All state belongs to one scan; independent scanners share nothing.
pub struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    /// Byte offset where the current lexeme starts.
    start: usize,
    /// Byte offset of the next unconsumed character.
    current: usize,
    /// 1-based line of `current`.
    line: u32,
    /// Line on which the current lexeme starts.
    start_line: u32,
    diagnostics: DiagnosticCollection,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Scan every remaining token, finishing with the EOF token.
    pub fn scan_tokens(mut self) -> ScanOutput {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        ScanOutput {
            tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Scan the next token. Once the input is exhausted every call
    /// returns an EOF token.
    pub fn scan(&mut self) -> Token {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            if let Some(token) = self.scan_token() {
                return token;
            }
        }
        self.start = self.current;
        Token::eof(self.line, self.current as TextPos)
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    /// Consume one character and return it.
    #[inline]
    fn advance(&mut self) -> Option<char> {
        let ch = self.source[self.current..].chars().next()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.current).copied()
    }

    #[inline]
    fn peek_next(&self) -> Option<u8> {
        self.bytes.get(self.current + 1).copied()
    }

    /// Consume the next byte only if it is `expected`.
    #[inline]
    fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn lexeme_range(&self) -> TextRange {
        TextRange::new(self.start as TextPos, self.current as TextPos)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            &self.source[self.start..self.current],
            self.start_line,
            self.lexeme_range(),
        )
    }

    /// Pick the two-character kind when the next byte is `=`.
    fn make_with_equals(&mut self, with_equals: TokenKind, bare: TokenKind) -> Token {
        let kind = if self.match_byte(b'=') { with_equals } else { bare };
        self.make_token(kind)
    }

    /// Consume and classify one character. Returns `None` for whitespace,
    /// comments and faults.
    fn scan_token(&mut self) -> Option<Token> {
        let ch = self.advance()?;
        match ch {
            '(' => Some(self.make_token(TokenKind::LeftParen)),
            ')' => Some(self.make_token(TokenKind::RightParen)),
            '{' => Some(self.make_token(TokenKind::LeftBrace)),
            '}' => Some(self.make_token(TokenKind::RightBrace)),
            ',' => Some(self.make_token(TokenKind::Comma)),
            '.' => Some(self.make_token(TokenKind::Dot)),
            '-' => Some(self.make_token(TokenKind::Minus)),
            '+' => Some(self.make_token(TokenKind::Plus)),
            ';' => Some(self.make_token(TokenKind::Semicolon)),
            '*' => Some(self.make_token(TokenKind::Star)),

            '!' => Some(self.make_with_equals(TokenKind::BangEqual, TokenKind::Bang)),
            '=' => Some(self.make_with_equals(TokenKind::EqualEqual, TokenKind::Equal)),
            '<' => Some(self.make_with_equals(TokenKind::LessEqual, TokenKind::Less)),
            '>' => Some(self.make_with_equals(TokenKind::GreaterEqual, TokenKind::Greater)),

            '/' => {
                if self.match_byte(b'/') {
                    self.skip_line_comment();
                    None
                } else {
                    Some(self.make_token(TokenKind::Slash))
                }
            }

            c if is_white_space_single_line(c) => None,
            '\n' => {
                self.line += 1;
                None
            }

            '"' => self.scan_string(),

            c if c.is_ascii() && is_digit(c as u8) => Some(self.scan_number()),

            c if is_identifier_start(c) => Some(self.scan_identifier()),

            c => {
                let text = c.to_string();
                self.diagnostics.add(
                    Diagnostic::new(&messages::UNEXPECTED_CHARACTER, self.line, &[text.as_str()])
                        .with_span(self.lexeme_range()),
                );
                None
            }
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Skip to the next line feed, leaving it for the dispatch loop.
    fn skip_line_comment(&mut self) {
        match memchr::memchr(LINE_FEED, &self.bytes[self.current..]) {
            Some(offset) => self.current += offset,
            None => self.current = self.bytes.len(),
        }
    }

    fn scan_string(&mut self) -> Option<Token> {
        let body_start = self.current;
        let rest = &self.bytes[body_start..];
        match memchr::memchr(DOUBLE_QUOTE, rest) {
            Some(offset) => {
                let body_end = body_start + offset;
                self.line += count_line_feeds(&self.bytes[body_start..body_end]);
                self.current = body_end + 1;
                let value = self.source[body_start..body_end].to_string();
                Some(self.make_token(TokenKind::String).with_literal(LiteralValue::Str(value)))
            }
            None => {
                self.line += count_line_feeds(rest);
                self.current = self.bytes.len();
                self.diagnostics.add(
                    Diagnostic::new(&messages::UNTERMINATED_STRING, self.line, &[])
                        .with_span(self.lexeme_range()),
                );
                None
            }
        }
    }

    fn scan_number(&mut self) -> Token {
        self.scan_digits();

        // A fraction needs at least one digit after the dot.
        if self.peek() == Some(DOT) && self.peek_next().map_or(false, is_digit) {
            self.current += 1;
            self.scan_digits();
        }

        let text = &self.source[self.start..self.current];
        // Digits with an optional digit-led fraction always parse.
        let value: f64 = text.parse().unwrap_or(f64::NAN);
        self.make_token(TokenKind::Number)
            .with_literal(LiteralValue::Number(value))
    }

    fn scan_digits(&mut self) {
        while self.peek().map_or(false, is_digit) {
            self.current += 1;
        }
    }

    fn scan_identifier(&mut self) -> Token {
        while self.peek().map_or(false, is_identifier_part) {
            self.current += 1;
        }
        let text = &self.source[self.start..self.current];
        let kind = TokenKind::from_keyword(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}

fn count_line_feeds(bytes: &[u8]) -> u32 {
    memchr::memchr_iter(LINE_FEED, bytes).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_simple_tokens() {
        let mut scanner = Scanner::new("( ) { } , . - + ; *");
        assert_eq!(scanner.scan().kind, TokenKind::LeftParen);
        assert_eq!(scanner.scan().kind, TokenKind::RightParen);
        assert_eq!(scanner.scan().kind, TokenKind::LeftBrace);
        assert_eq!(scanner.scan().kind, TokenKind::RightBrace);
        assert_eq!(scanner.scan().kind, TokenKind::Comma);
        assert_eq!(scanner.scan().kind, TokenKind::Dot);
        assert_eq!(scanner.scan().kind, TokenKind::Minus);
        assert_eq!(scanner.scan().kind, TokenKind::Plus);
        assert_eq!(scanner.scan().kind, TokenKind::Semicolon);
        assert_eq!(scanner.scan().kind, TokenKind::Star);
        assert_eq!(scanner.scan().kind, TokenKind::Eof);
    }

    #[test]
    fn test_scan_operators() {
        let mut scanner = Scanner::new("! != = == < <= > >= /");
        assert_eq!(scanner.scan().kind, TokenKind::Bang);
        assert_eq!(scanner.scan().kind, TokenKind::BangEqual);
        assert_eq!(scanner.scan().kind, TokenKind::Equal);
        assert_eq!(scanner.scan().kind, TokenKind::EqualEqual);
        assert_eq!(scanner.scan().kind, TokenKind::Less);
        assert_eq!(scanner.scan().kind, TokenKind::LessEqual);
        assert_eq!(scanner.scan().kind, TokenKind::Greater);
        assert_eq!(scanner.scan().kind, TokenKind::GreaterEqual);
        assert_eq!(scanner.scan().kind, TokenKind::Slash);
        assert_eq!(scanner.scan().kind, TokenKind::Eof);
    }

    #[test]
    fn test_scan_identifier_and_keyword() {
        let mut scanner = Scanner::new("var x = 42;");
        assert_eq!(scanner.scan().kind, TokenKind::Var);
        let ident = scanner.scan();
        assert_eq!(ident.kind, TokenKind::Identifier);
        assert_eq!(ident.lexeme, "x");
        assert_eq!(scanner.scan().kind, TokenKind::Equal);
        let num = scanner.scan();
        assert_eq!(num.kind, TokenKind::Number);
        assert_eq!(num.number(), Some(42.0));
        assert_eq!(scanner.scan().kind, TokenKind::Semicolon);
        assert_eq!(scanner.scan().kind, TokenKind::Eof);
    }

    #[test]
    fn test_eof_repeats() {
        let mut scanner = Scanner::new("a");
        assert_eq!(scanner.scan().kind, TokenKind::Identifier);
        assert!(scanner.scan().is_eof());
        let eof = scanner.scan();
        assert!(eof.is_eof());
        assert_eq!(eof.range, TextRange::empty(1));
    }

    #[test]
    fn test_comment_leaves_newline_for_line_count() {
        let mut scanner = Scanner::new("// note\n// more\nx");
        let token = scanner.scan();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.line, 3);
    }

    #[test]
    fn test_take_diagnostics() {
        let mut scanner = Scanner::new("@");
        assert!(scanner.scan().is_eof());
        assert_eq!(scanner.diagnostics().len(), 1);
        let diags = scanner.take_diagnostics();
        assert_eq!(diags.len(), 1);
        assert!(scanner.diagnostics().is_empty());
    }

    #[test]
    fn test_count_line_feeds() {
        assert_eq!(count_line_feeds(b""), 0);
        assert_eq!(count_line_feeds(b"a\nb\n\n"), 3);
    }
}
