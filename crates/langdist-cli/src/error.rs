//! CLI error type and exit codes.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | General or IO error |
//! | 3 | Configuration error |
//! | 4 | Invalid input (malformed or empty corpus) |
//!
//! Pair failures are not errors: a run with failed pairs still exits 0 and
//! lists them in its summary.

use langdist_core::LangDistError;
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    General = 1,
    Config = 3,
    InvalidInput = 4,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

/// Errors surfaced by a command handler.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failure inside the library
    #[error(transparent)]
    Core(#[from] LangDistError),

    /// Summary could not be rendered
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing to stdout failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> CliExitCode {
        match self {
            Self::Core(err) => exit_code_for_error(err),
            Self::Serialization(_) | Self::Io(_) => CliExitCode::General,
        }
    }
}

/// Map a library error onto the process exit code.
pub fn exit_code_for_error(err: &LangDistError) -> CliExitCode {
    if matches!(err, LangDistError::ConfigError(_)) {
        CliExitCode::Config
    } else if err.is_input_error() {
        CliExitCode::InvalidInput
    } else {
        CliExitCode::General
    }
}
