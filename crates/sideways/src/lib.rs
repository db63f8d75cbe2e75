//! sideways: convert Selenium IDE recordings into PHPUnit Selenium2 test
//! cases.
//!
//! The converter is one-shot and synchronous: parse the recorded document
//! into `{command, target, value}` triples, translate each command into
//! typed PHP statements, assemble per-test methods and render one output
//! unit. All mutable state lives in a per-conversion [`Session`] created at
//! the start of every `convert_*` call.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sideways::{ConvertOptions, Converter};
//!
//! let converter = Converter::new(ConvertOptions::default().with_browser("chrome"));
//! let html = std::fs::read_to_string("Login.html").unwrap();
//! let php = converter.convert_html(&html, None, None).unwrap();
//! println!("{php}");
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assembler;
pub mod capabilities;
pub mod commands;
pub mod config;
pub mod error;
pub mod parser;
pub mod selector;
pub mod substitute;
pub mod template;

pub use config::{ConvertOptions, Session, DEFAULT_PARENT_CLASS, DEFAULT_TEST_URL};
pub use error::{ConvertError, ConvertResult};
pub use sideways_php_gen::LineEnding;
pub use template::Template;

use assembler::Assembler;

/// Class/test name used when neither the caller nor the document names one.
pub const DEFAULT_TEST_NAME: &str = "some";

const HTML_ORIGIN: &str = "Selenium HTML test case";
const SIDE_ORIGIN: &str = "Selenium IDE JSON test case";

/// Converts recorded documents into PHP test-case source.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    opts: ConvertOptions,
}

impl Converter {
    /// Create a converter with the given options.
    #[must_use]
    pub fn new(opts: ConvertOptions) -> Self {
        Self { opts }
    }

    /// The options this converter runs with.
    #[must_use]
    pub fn options(&self) -> &ConvertOptions {
        &self.opts
    }

    /// Convert a legacy HTML recording.
    ///
    /// `test_name` overrides the document title for class and method
    /// naming (typically derived from the input filename).
    ///
    /// # Errors
    ///
    /// Fatal: unparseable document, unknown selector or option-selector
    /// syntax, unsupported browser name.
    pub fn convert_html(
        &self,
        html: &str,
        test_name: Option<&str>,
        template: Option<&Template>,
    ) -> ConvertResult<String> {
        let mut session = Session::new();
        let document = parser::parse_html(html)?;

        let title = test_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .or_else(|| document.title.clone())
            .unwrap_or_else(|| DEFAULT_TEST_NAME.to_string());

        let mut cases = document.cases;
        for case in &mut cases {
            case.name.clone_from(&title);
        }

        let test_url = self
            .opts
            .test_url
            .clone()
            .or(document.test_url);

        let mut assembler = Assembler::new(&self.opts, &mut session);
        match template {
            Some(template) => assembler.assemble_template(
                template,
                HTML_ORIGIN,
                &title,
                test_url.as_deref(),
                &cases,
            ),
            None => assembler.assemble_class(HTML_ORIGIN, &title, test_url.as_deref(), &cases),
        }
    }

    /// Convert a `.side` JSON document, selecting the suite configured in
    /// the options (first suite when unset).
    ///
    /// # Errors
    ///
    /// Fatal: malformed JSON, missing suite, dangling test reference, and
    /// everything listed for [`Self::convert_html`].
    pub fn convert_side(&self, json: &str, template: Option<&Template>) -> ConvertResult<String> {
        let mut session = Session::new();
        let document = parser::parse_side(json, self.opts.suite_reference.as_deref())?;

        let title = document
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TEST_NAME.to_string());

        let mut cases = document.cases;
        if self.opts.single_test {
            cases.truncate(1);
        }

        let test_url = self
            .opts
            .test_url
            .clone()
            .or(document.test_url);

        let mut assembler = Assembler::new(&self.opts, &mut session);
        match template {
            Some(template) => assembler.assemble_template(
                template,
                SIDE_ORIGIN,
                &title,
                test_url.as_deref(),
                &cases,
            ),
            None => assembler.assemble_class(SIDE_ORIGIN, &title, test_url.as_deref(), &cases),
        }
    }
}
