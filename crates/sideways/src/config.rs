//! Conversion options and per-conversion session state.

use std::collections::{BTreeMap, HashMap};

use sideways_php_gen::LineEnding;

/// Base URL used when neither the options nor the recording supply one.
pub const DEFAULT_TEST_URL: &str = "http://example.com";

/// Parent class of generated test cases.
pub const DEFAULT_PARENT_CLASS: &str = "PHPUnit_Extensions_Selenium2TestCase";

/// Options for one converter instance.
///
/// Everything here is immutable during a conversion; mutable state lives in
/// [`Session`].
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Browser passed to `setBrowser` in the generated `setUp`
    pub browser: String,
    /// Base URL for `setBrowserUrl` (recording or [`DEFAULT_TEST_URL`] when unset)
    pub test_url: Option<String>,
    /// Selenium server host for `setHost`, omitted when unset
    pub remote_host: Option<String>,
    /// Selenium server port for `setPort`, omitted when unset
    pub remote_port: Option<String>,
    /// Prefix for the generated class name
    pub class_prefix: String,
    /// Parent class in the `extends` clause
    pub parent_class: String,
    /// Verbatim lines placed before the class declaration
    pub pre_class: Vec<String>,
    /// Verbatim lines placed at the top of the class body
    pub additional_class_content: Vec<String>,
    /// Take a screenshot after every `open` and before every `clickAndWait`
    pub screenshots_on_every_step: bool,
    /// Comma-separated browser names resolved against the definitions table
    pub browsers: Option<String>,
    /// Project name tag for capability descriptors
    pub project_name: Option<String>,
    /// Build id tag for capability descriptors
    pub project_build: Option<String>,
    /// Suite to convert from a `.side` document, by id or name
    pub suite_reference: Option<String>,
    /// Route capability descriptors through a local tunnel
    pub browserstack_local: bool,
    /// Tunnel identifier, only meaningful with `browserstack_local`
    pub browserstack_local_identifier: Option<String>,
    /// Record video of the session (disabling adds a capability flag)
    pub video: bool,
    /// Stored-variable overrides applied by `store*` commands
    pub override_params: BTreeMap<String, String>,
    /// Convert only the first test case of the selected suite
    pub single_test: bool,
    /// Value for the `{$customParam1}` template placeholder
    pub custom_param1: String,
    /// Value for the `{$customParam2}` template placeholder
    pub custom_param2: String,
    /// Output line terminator
    pub eol: LineEnding,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            browser: "firefox".to_string(),
            test_url: None,
            remote_host: None,
            remote_port: None,
            class_prefix: String::new(),
            parent_class: DEFAULT_PARENT_CLASS.to_string(),
            pre_class: Vec::new(),
            additional_class_content: Vec::new(),
            screenshots_on_every_step: false,
            browsers: None,
            project_name: None,
            project_build: None,
            suite_reference: None,
            browserstack_local: false,
            browserstack_local_identifier: None,
            video: true,
            override_params: BTreeMap::new(),
            single_test: false,
            custom_param1: String::new(),
            custom_param2: String::new(),
            eol: LineEnding::Lf,
        }
    }
}

impl ConvertOptions {
    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the browser.
    #[must_use]
    pub fn with_browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = browser.into();
        self
    }

    /// Set the base test URL.
    #[must_use]
    pub fn with_test_url(mut self, url: impl Into<String>) -> Self {
        self.test_url = Some(url.into());
        self
    }

    /// Set the remote Selenium server host.
    #[must_use]
    pub fn with_remote_host(mut self, host: impl Into<String>) -> Self {
        self.remote_host = Some(host.into());
        self
    }

    /// Set the remote Selenium server port.
    #[must_use]
    pub fn with_remote_port(mut self, port: impl Into<String>) -> Self {
        self.remote_port = Some(port.into());
        self
    }

    /// Set the class name prefix.
    #[must_use]
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Enable screenshots on every step.
    #[must_use]
    pub const fn with_screenshots_on_every_step(mut self, enabled: bool) -> Self {
        self.screenshots_on_every_step = enabled;
        self
    }

    /// Set the output line terminator.
    #[must_use]
    pub const fn with_eol(mut self, eol: LineEnding) -> Self {
        self.eol = eol;
        self
    }

    /// Parse an override string of the form `key,value$key,value...` into
    /// the override table. Malformed segments are skipped.
    #[must_use]
    pub fn with_override_params(mut self, raw: &str) -> Self {
        self.override_params = parse_override_params(raw);
        self
    }
}

/// Parse a `key,value$key,value...` override string.
#[must_use]
pub fn parse_override_params(raw: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for pair in raw.split('$') {
        if let Some((key, value)) = pair.split_once(',') {
            if !key.is_empty() {
                params.insert(key.to_string(), value.to_string());
            }
        }
    }
    params
}

/// Mutable state for one conversion call.
///
/// Reset at the start of every `convert`; nothing survives between
/// invocations.
#[derive(Debug)]
pub struct Session {
    /// Screenshot step counter, starts at 1
    pub step_count: u32,
    /// Timeout used by waitFor* commands without an explicit one,
    /// mutable via `setTimeout`
    pub wait_timeout_ms: u64,
    /// Whether the next confirmation is accepted (true) or dismissed (false)
    pub confirm_next_alert: bool,
    /// Index assigned to the next generated test method
    pub test_index: u32,
    /// Name of the previously generated method, for `@depends` annotations
    pub last_test_name: Option<String>,
    method_names: HashMap<String, u32>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create fresh session state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            step_count: 1,
            wait_timeout_ms: crate::commands::DEFAULT_WAIT_TIMEOUT_MS,
            confirm_next_alert: true,
            test_index: 0,
            last_test_name: None,
            method_names: HashMap::new(),
        }
    }

    /// Disambiguate a method name against every name handed out so far.
    ///
    /// The first use of a base name is returned as-is; duplicates get a
    /// zero-padded ordinal (`001` for the first duplicate).
    pub fn unique_method_name(&mut self, base: &str) -> String {
        let seen = self.method_names.entry(base.to_string()).or_insert(0);
        let name = if *seen == 0 {
            base.to_string()
        } else {
            format!("{base}{seen:03}")
        };
        *seen += 1;
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.browser, "firefox");
        assert_eq!(opts.parent_class, DEFAULT_PARENT_CLASS);
        assert!(opts.video);
        assert!(!opts.screenshots_on_every_step);
    }

    #[test]
    fn override_params_parsing() {
        let params = parse_override_params("var_ORIGIN,http://localhost$retries,3");
        assert_eq!(params.len(), 2);
        assert_eq!(params["var_ORIGIN"], "http://localhost");
        assert_eq!(params["retries"], "3");
    }

    #[test]
    fn override_params_skips_malformed() {
        let params = parse_override_params("novalue$k,v");
        assert_eq!(params.len(), 1);
        assert_eq!(params["k"], "v");
    }

    #[test]
    fn session_resets_to_defaults() {
        let session = Session::new();
        assert_eq!(session.step_count, 1);
        assert_eq!(session.wait_timeout_ms, 30_000);
        assert!(session.confirm_next_alert);
        assert_eq!(session.test_index, 0);
        assert!(session.last_test_name.is_none());
    }

    #[test]
    fn method_names_never_collide() {
        let mut session = Session::new();
        assert_eq!(session.unique_method_name("testLogin_Test"), "testLogin_Test");
        assert_eq!(
            session.unique_method_name("testLogin_Test"),
            "testLogin_Test001"
        );
        assert_eq!(
            session.unique_method_name("testLogin_Test"),
            "testLogin_Test002"
        );
        assert_eq!(session.unique_method_name("testOther"), "testOther");
    }
}
