//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// sideways: converts Selenium IDE recordings into PHPUnit Selenium2 test case code
#[derive(Parser, Debug)]
#[command(name = "sideways")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Recorded test file (.html, .side or .json) or a directory of them
    pub input: PathBuf,

    /// Output file path (derived from the input filename when omitted)
    pub output: Option<PathBuf>,

    /// Browser for the generated setUp block
    #[arg(long)]
    pub browser: Option<String>,

    /// Base URL for the generated tests
    #[arg(long = "browser-url")]
    pub browser_url: Option<String>,

    /// Selenium server address
    #[arg(long = "remote-host")]
    pub remote_host: Option<String>,

    /// Selenium server port
    #[arg(long = "remote-port")]
    pub remote_port: Option<String>,

    /// Destination folder for generated files
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Test class name prefix
    #[arg(long = "class-prefix")]
    pub class_prefix: Option<String>,

    /// Prefix for generated php filenames
    #[arg(long = "php-prefix", default_value = "")]
    pub php_prefix: String,

    /// Postfix for generated php filenames
    #[arg(long = "php-postfix", default_value = "Test")]
    pub php_postfix: String,

    /// Add a content-hash part to output filenames
    #[arg(long = "use-hash-postfix")]
    pub use_hash_postfix: bool,

    /// Glob pattern for input files when converting a directory
    #[arg(long = "files-pattern", default_value = "*.html")]
    pub files_pattern: String,

    /// Descend into subdirectories when converting a directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Template file for the output (see the placeholder list in the docs)
    #[arg(long = "output-tpl")]
    pub output_tpl: Option<PathBuf>,

    /// Value for the {$customParam1} template placeholder
    #[arg(long = "custom-param1", default_value = "")]
    pub custom_param1: String,

    /// Value for the {$customParam2} template placeholder
    #[arg(long = "custom-param2", default_value = "")]
    pub custom_param2: String,

    /// Comma-separated browser names from the definitions table
    #[arg(long)]
    pub browsers: Option<String>,

    /// Project name for capability tagging
    #[arg(long = "project-name")]
    pub project_name: Option<String>,

    /// Build id for capability tagging (e.g. 42)
    #[arg(long = "project-build")]
    pub project_build: Option<String>,

    /// Test suite reference by id or name in the JSON file
    #[arg(long = "test-suite")]
    pub test_suite: Option<String>,

    /// Take a screenshot on every open and clickAndWait step
    #[arg(long = "screenshots-on-every-step")]
    pub screenshots_on_every_step: bool,

    /// Run capability sessions through a local tunnel
    #[arg(long = "browserstack-local")]
    pub browserstack_local: bool,

    /// Local tunnel identifier
    #[arg(long = "browserstack-local-identifier")]
    pub browserstack_local_identifier: Option<String>,

    /// Record video of the session (1|0)
    #[arg(long, default_value = "1")]
    pub video: String,

    /// Stored-variable overrides: key,value$key,value...
    #[arg(long = "override-params")]
    pub override_params: Option<String>,

    /// Convert only the first test case of the suite
    #[arg(long = "single-test")]
    pub single_test: bool,

    /// Use CRLF line terminators in the output
    #[arg(long)]
    pub crlf: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorArg,
}

/// Color output choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorArg {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl Cli {
    /// Whether video recording stays enabled.
    #[must_use]
    pub fn video_enabled(&self) -> bool {
        !matches!(self.video.as_str(), "0" | "false")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let cli = Cli::try_parse_from(["sideways", "Login.html"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("Login.html"));
        assert!(cli.output.is_none());
        assert_eq!(cli.php_postfix, "Test");
        assert_eq!(cli.files_pattern, "*.html");
        assert!(cli.video_enabled());
    }

    #[test]
    fn parses_full_invocation() {
        let cli = Cli::try_parse_from([
            "sideways",
            "--browser",
            "chrome",
            "--browser-url",
            "http://x",
            "--dest",
            "out",
            "--class-prefix",
            "Acceptance_",
            "--browsers",
            "chrome,firefox",
            "--test-suite",
            "Smoke",
            "--override-params",
            "origin,http://localhost",
            "--video",
            "0",
            "--screenshots-on-every-step",
            "-r",
            "suite.side",
        ])
        .unwrap();
        assert_eq!(cli.browser.as_deref(), Some("chrome"));
        assert_eq!(cli.dest, Some(PathBuf::from("out")));
        assert!(cli.recursive);
        assert!(cli.screenshots_on_every_step);
        assert!(!cli.video_enabled());
        assert_eq!(cli.test_suite.as_deref(), Some("Smoke"));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["sideways"]).is_err());
    }
}
