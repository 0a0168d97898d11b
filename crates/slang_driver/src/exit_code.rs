use slang_core::error::SlangError;

/// Process exit codes, following the BSD `sysexits.h` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    /// The command line was used incorrectly.
    Usage = 64,
    /// A script produced at least one lexical error, or could not be
    /// scanned at all.
    DataError = 65,
    /// A script could not be read.
    IoError = 74,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&SlangError> for ExitCode {
    fn from(error: &SlangError) -> Self {
        match error {
            SlangError::Io { .. } => ExitCode::IoError,
            SlangError::SourceTooLarge { .. } => ExitCode::DataError,
            SlangError::Usage => ExitCode::Usage,
        }
    }
}
