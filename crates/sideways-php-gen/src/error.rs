//! Error types for `sideways-php-gen`.

use thiserror::Error;

/// Result type alias for PHP generation operations.
pub type Result<T> = std::result::Result<T, PhpGenError>;

/// Errors that can occur during PHP generation.
#[derive(Debug, Error)]
pub enum PhpGenError {
    /// Invalid identifier name (reserved word, invalid characters, etc.)
    #[error("Invalid identifier '{name}': {reason}")]
    InvalidIdentifier {
        /// The invalid identifier
        name: String,
        /// Why it's invalid
        reason: String,
    },

    /// Code generation failed
    #[error("Code generation failed: {0}")]
    GenerationError(String),
}
