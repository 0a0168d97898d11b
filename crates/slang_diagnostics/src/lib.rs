//! slang_diagnostics: Lexical diagnostics and the error-reporting sink.
//!
//! Diagnostics carry the 1-based line where a fault was found, the byte
//! range it covers, and resolved message text. The scanner collects them
//! into a [`DiagnosticCollection`]; a [`Reporter`] prints them in the fixed
//! `[line N] Error where: message` form and remembers that an error was seen.

mod reporter;

pub use reporter::Reporter;

use slang_core::text::TextRange;
use std::fmt;

/// The kinds of lexical fault the scanner can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A string literal was still open at end of input.
    UnterminatedString,
    /// A character matched no lexical class.
    UnexpectedCharacter,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnterminatedString => write!(f, "unterminated-string"),
            DiagnosticKind::UnexpectedCharacter => write!(f, "unexpected-character"),
        }
    }
}

/// A diagnostic message template with a code and kind.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub kind: DiagnosticKind,
    /// The message template string. May contain `{0}`, `{1}`, ... placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with location information and resolved message text.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: u32,
    /// 1-based source line.
    pub line: u32,
    /// Free-form location text placed after `Error`; empty for scanner faults.
    pub location: String,
    pub message_text: String,
    /// The byte range the diagnostic points at, if known.
    pub span: Option<TextRange>,
}

impl Diagnostic {
    /// Create a diagnostic at `line` from a message template.
    pub fn new(message: &DiagnosticMessage, line: u32, args: &[&str]) -> Self {
        Self {
            kind: message.kind,
            code: message.code,
            line,
            location: String::new(),
            message_text: format_message(message.message, args),
            span: None,
        }
    }

    pub fn with_span(mut self, span: TextRange) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error {}: {}",
            self.line, self.location, self.message_text
        )
    }
}

/// Format a message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// An ordered, append-only list of diagnostics from one scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Every diagnostic the scanner produces is an error.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }

    /// Count the diagnostics of one kind.
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollection {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

// ============================================================================
// Diagnostic messages
// ============================================================================

pub mod messages {
    use super::*;

    pub const UNTERMINATED_STRING: DiagnosticMessage = DiagnosticMessage {
        code: 1001,
        kind: DiagnosticKind::UnterminatedString,
        message: "Unterminated string.",
    };

    pub const UNEXPECTED_CHARACTER: DiagnosticMessage = DiagnosticMessage {
        code: 1002,
        kind: DiagnosticKind::UnexpectedCharacter,
        message: "Unexpected character '{0}'.",
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(format_message("'{0}' and '{1}'", &["a", "b"]), "'a' and 'b'");
        assert_eq!(format_message("no args", &[]), "no args");
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(&messages::UNEXPECTED_CHARACTER, 3, &["@"]);
        assert_eq!(diag.to_string(), "[line 3] Error : Unexpected character '@'.");
    }

    #[test]
    fn test_diagnostic_display_with_location() {
        let diag = Diagnostic::new(&messages::UNTERMINATED_STRING, 1, &[]).with_location("at end");
        assert_eq!(diag.to_string(), "[line 1] Error at end: Unterminated string.");
    }

    #[test]
    fn test_collection() {
        let mut diags = DiagnosticCollection::new();
        assert!(!diags.has_errors());
        diags.add(Diagnostic::new(&messages::UNTERMINATED_STRING, 1, &[]));
        diags.add(Diagnostic::new(&messages::UNEXPECTED_CHARACTER, 2, &["#"]));
        diags.add(Diagnostic::new(&messages::UNEXPECTED_CHARACTER, 2, &["$"]));
        assert!(diags.has_errors());
        assert_eq!(diags.len(), 3);
        assert_eq!(diags.count_of(DiagnosticKind::UnexpectedCharacter), 2);
        let lines: Vec<u32> = diags.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2, 2]);
        diags.clear();
        assert!(diags.is_empty());
    }
}
