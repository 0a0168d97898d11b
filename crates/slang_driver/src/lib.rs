//! slang_driver: Run orchestration.
//!
//! A [`Session`] feeds complete source strings through the scanner, hands
//! every diagnostic to its [`Reporter`], and exposes the reporter's sticky
//! error flag so the caller can pick an exit code.

mod exit_code;

pub use exit_code::ExitCode;

use slang_core::error::{SlangError, SlangResult};
use slang_core::text::MAX_SOURCE_LEN;
use slang_diagnostics::Reporter;
use slang_scanner::{ScanOutput, Scanner};
use std::io::{self, Write};
use std::path::Path;

/// One run of the front end: a file, or a whole interactive session.
pub struct Session<W: Write = io::Stderr> {
    reporter: Reporter<W>,
    /// Whether diagnostics are printed by the reporter. When off, the
    /// caller renders them and only the flag is updated.
    print_diagnostics: bool,
}

impl Session<io::Stderr> {
    /// A session printing diagnostics to standard error.
    pub fn new() -> Self {
        Self::with_reporter(Reporter::stderr())
    }

    /// A session that only records whether errors happened.
    pub fn quiet() -> Self {
        let mut session = Self::new();
        session.print_diagnostics = false;
        session
    }
}

impl Default for Session<io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Session<W> {
    pub fn with_reporter(reporter: Reporter<W>) -> Self {
        Self {
            reporter,
            print_diagnostics: true,
        }
    }

    /// Scan a complete source string.
    pub fn run(&mut self, source: &str) -> ScanOutput {
        let output = Scanner::new(source).scan_tokens();
        if self.print_diagnostics {
            self.reporter.emit_all(&output.diagnostics);
        } else if output.has_errors() {
            self.reporter.set_error();
        }
        output
    }

    /// Load a script in full and scan it.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> SlangResult<ScanOutput> {
        let source = load_source(path.as_ref())?;
        Ok(self.run(&source))
    }

    #[inline]
    pub fn had_error(&self) -> bool {
        self.reporter.had_error()
    }

    /// Reset the sticky flag, e.g. before the next interactive line.
    pub fn clear_error(&mut self) {
        self.reporter.clear();
    }

    /// The exit code a file run should end with.
    pub fn exit_code(&self) -> ExitCode {
        if self.had_error() {
            ExitCode::DataError
        } else {
            ExitCode::Success
        }
    }

    pub fn into_reporter(self) -> Reporter<W> {
        self.reporter
    }
}

/// Read a script from disk.
pub fn load_source(path: &Path) -> SlangResult<String> {
    let source = std::fs::read_to_string(path).map_err(|source| SlangError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    check_source_len(path, source.len() as u64)?;
    Ok(source)
}

/// Reject sources whose byte offsets would not fit in a `TextPos`.
pub fn check_source_len(path: &Path, len: u64) -> SlangResult<()> {
    if len > MAX_SOURCE_LEN {
        return Err(SlangError::SourceTooLarge {
            path: path.to_path_buf(),
            len,
            max: MAX_SOURCE_LEN,
        });
    }
    Ok(())
}
