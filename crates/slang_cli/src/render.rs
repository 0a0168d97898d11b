//! Output rendering: token listings and diagnostic reports.

use miette::{NamedSource, SourceSpan};
use slang_core::SlangError;
use slang_diagnostics::{Diagnostic, DiagnosticKind};
use slang_scanner::Token;
use std::io::{self, Write};
use thiserror::Error;

/// Print one line per token, as text or as JSON objects.
pub fn print_tokens<W: Write>(out: &mut W, tokens: &[Token], json: bool) -> io::Result<()> {
    for token in tokens {
        if json {
            serde_json::to_writer(&mut *out, token).map_err(io::Error::from)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", token)?;
        }
    }
    out.flush()
}

/// A lexical diagnostic with its source attached, for annotated output.
#[derive(Debug, Error, miette::Diagnostic)]
#[error("[line {line}] {message}")]
#[diagnostic(code(slang::lex))]
pub struct LexicalReport {
    line: u32,
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: Option<SourceSpan>,
    #[help]
    help: Option<String>,
}

impl LexicalReport {
    pub fn new(diagnostic: &Diagnostic, name: &str, source: &str) -> Self {
        let help = match diagnostic.kind {
            DiagnosticKind::UnterminatedString => {
                Some("close the string with a matching '\"'".to_string())
            }
            DiagnosticKind::UnexpectedCharacter => None,
        };
        Self {
            line: diagnostic.line,
            message: diagnostic.message_text.clone(),
            src: NamedSource::new(name, source.to_string()),
            span: diagnostic
                .span
                .map(|range| SourceSpan::from((range.pos as usize, range.len() as usize))),
            help,
        }
    }
}

/// Render every diagnostic as an annotated source snippet on stderr.
pub fn print_pretty(diagnostics: &[Diagnostic], name: &str, source: &str) {
    for diagnostic in diagnostics {
        let report = miette::Report::new(LexicalReport::new(diagnostic, name, source));
        eprintln!("{:?}", report);
    }
}

/// A failure that ends the run before or instead of scanning.
#[derive(Debug, Error, miette::Diagnostic)]
#[error(transparent)]
#[diagnostic(code(slang::fatal))]
pub struct FatalError(#[from] pub SlangError);

pub fn print_fatal(error: SlangError) {
    eprintln!("{:?}", miette::Report::new(FatalError(error)));
}
