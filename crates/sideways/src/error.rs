//! Result and error types for the converter.
//!
//! Fatal errors unwind the whole conversion; diagnostics (unknown command,
//! reserved variable name) go to the tracing note stream instead and never
//! appear here.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that abort a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Locator string matched no known selector strategy
    #[error("Unknown selector '{locator}'")]
    UnknownSelector {
        /// The offending locator
        locator: String,
    },

    /// Option locator of a `select` command matched neither `label=` nor `value=`
    #[error("Unknown option selector '{locator}'")]
    UnknownOptionSelector {
        /// The offending option locator
        locator: String,
    },

    /// Browser name absent from the definitions table
    #[error("Unsupported browser with name {name} specified")]
    UnsupportedBrowser {
        /// The requested browser name
        name: String,
    },

    /// Template file missing or unreadable
    #[error("Template file {path} is not accessible")]
    TemplateNotAccessible {
        /// The template path
        path: String,
    },

    /// Input document could not be parsed into test cases
    #[error("{format} parse error: {message}")]
    Parse {
        /// Input format ("HTML" or "JSON")
        format: &'static str,
        /// What went wrong
        message: String,
    },

    /// PHP IR construction failed
    #[error("Code generation failed: {0}")]
    PhpGen(#[from] sideways_php_gen::PhpGenError),

    /// IO error reading inputs or templates
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    /// Create a parse error for the given input format.
    #[must_use]
    pub fn parse(format: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }
}
