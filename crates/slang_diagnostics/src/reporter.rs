//! The error sink that prints diagnostics and keeps the sticky error flag.

use crate::Diagnostic;
use std::io::{self, Write};

/// Writes `[line N] Error where: message` lines and records that an error
/// was reported. The flag stays set until [`Reporter::clear`] is called.
pub struct Reporter<W: Write> {
    out: W,
    had_error: bool,
}

impl Reporter<io::Stderr> {
    /// A reporter writing to standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            had_error: false,
        }
    }

    /// Report an error at `line` with no location text.
    pub fn error(&mut self, line: u32, message: &str) {
        self.report(line, "", message);
    }

    pub fn report(&mut self, line: u32, location: &str, message: &str) {
        // A failed write to the sink must not stop the caller.
        let _ = writeln!(self.out, "[line {}] Error {}: {}", line, location, message);
        self.had_error = true;
    }

    /// Report a structured diagnostic.
    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        self.report(diagnostic.line, &diagnostic.location, &diagnostic.message_text);
    }

    pub fn emit_all<'a>(&mut self, diagnostics: impl IntoIterator<Item = &'a Diagnostic>) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    #[inline]
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Reset the sticky flag.
    pub fn clear(&mut self) {
        self.had_error = false;
    }

    /// Mark an error without printing anything.
    pub fn set_error(&mut self) {
        self.had_error = true;
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
