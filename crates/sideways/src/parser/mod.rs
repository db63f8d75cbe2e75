//! Recorded-document parsing.
//!
//! Both input formats reduce to the same contract: an ordered sequence of
//! trimmed `{command, target, value}` triples per test case, plus a title
//! and optional base URL discovered in the document.

mod html;
mod side;

pub use html::parse_html;
pub use side::parse_side;

/// One recorded step. Ordering is significant and preserved from the
/// source document; fields are trimmed and entity-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedStep {
    /// Recorder command name (`open`, `click`, ...)
    pub command: String,
    /// First argument, usually a locator
    pub target: String,
    /// Second argument, usually a value or variable name
    pub value: String,
}

/// An ordered sequence of steps with a raw (unsanitized) name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Case name as recorded
    pub name: String,
    /// Steps in document order
    pub steps: Vec<RecordedStep>,
}

/// A parsed recording: test cases plus document-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Base URL declared by the document, when present
    pub test_url: Option<String>,
    /// Document or suite title, when present
    pub title: Option<String>,
    /// Test cases in document order
    pub cases: Vec<TestCase>,
}

/// Sanitize a recorded title into an identifier fragment: words are
/// capitalized, then every character outside `[A-Za-z0-9]` becomes `_`.
///
/// `"Login Test"` → `"Login_Test"`.
#[must_use]
pub fn sanitize_test_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push('_');
            at_word_start = c.is_whitespace();
        }
    }
    out
}
