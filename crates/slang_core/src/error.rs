//! Fatal errors raised around the scanner.
//!
//! Lexical faults are never errors in this sense: they are recorded as
//! diagnostics and scanning carries on. `SlangError` covers the failures
//! that stop a run outright.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlangError {
    /// A script could not be read from disk.
    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A script is too long for 32-bit byte offsets.
    #[error("'{}' is {len} bytes; scripts are limited to {max} bytes", path.display())]
    SourceTooLarge { path: PathBuf, len: u64, max: u64 },

    /// The command line named more than one script.
    #[error("Usage: slang [script]")]
    Usage,
}

pub type SlangResult<T> = Result<T, SlangError>;
