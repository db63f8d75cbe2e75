//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Conversion error from the core library
    #[error(transparent)]
    Convert(#[from] sideways::ConvertError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// Input path does not exist
    #[error("\"{0}\" is not an existing file or directory")]
    InputNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("Invalid files pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Some inputs failed to convert
    #[error("{failed} of {total} file(s) failed to convert")]
    PartialFailure {
        /// Number of failed files
        failed: usize,
        /// Total files attempted
        total: usize,
    },
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
