//! User-template splicing.
//!
//! Instead of the built-in class skeleton, callers may supply arbitrary
//! boilerplate with named placeholders; the assembler renders its pieces
//! into the placeholders with plain string replacement.

use std::path::Path;

use crate::error::{ConvertError, ConvertResult};

/// Placeholder names recognized in template files.
pub const PLACEHOLDERS: &[&str] = &[
    "{$comment}",
    "{$className}",
    "{$browser}",
    "{$testUrl}",
    "{$remoteHost}",
    "{$remotePort}",
    "{$testMethodName}",
    "{$testMethodContent}",
    "{$testMethods}",
    "{$customParam1}",
    "{$customParam2}",
    "{$browsers}",
    "{$depends}",
];

/// A loaded template file.
#[derive(Debug, Clone)]
pub struct Template {
    content: String,
}

impl Template {
    /// Load a template from disk.
    ///
    /// # Errors
    ///
    /// A missing or unreadable file is fatal for the conversion.
    pub fn load(path: impl AsRef<Path>) -> ConvertResult<Self> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map(|content| Self { content })
            .map_err(|_| ConvertError::TemplateNotAccessible {
                path: path.display().to_string(),
            })
    }

    /// Create a template from in-memory content.
    #[must_use]
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Apply replacements in order. Placeholders without a replacement stay
    /// verbatim; callers pass every placeholder, empty where inapplicable.
    #[must_use]
    pub fn render(&self, replacements: &[(&str, String)]) -> String {
        let mut out = self.content.clone();
        for (placeholder, value) in replacements {
            out = out.replace(placeholder, value);
        }
        out
    }
}
