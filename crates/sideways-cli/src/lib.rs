//! sideways CLI library.
//!
//! Argument parsing, input traversal and output filename derivation around
//! the `sideways` converter core.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod runner;

pub use commands::{Cli, ColorArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::ProgressReporter;
pub use runner::Runner;

/// Build the effective CLI configuration from parsed arguments.
#[must_use]
pub fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };
    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.into())
}

/// Run one CLI invocation.
///
/// # Errors
///
/// Propagates conversion, IO and traversal errors; the binary maps them to
/// a non-zero exit code.
pub fn run(cli: &Cli) -> CliResult<()> {
    let config = build_config(cli);
    let reporter = ProgressReporter::new(config.color.should_color(), config.verbosity.is_quiet());
    Runner::new(cli, reporter)?.run()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn config_from_flags() {
        let cli = Cli::try_parse_from(["sideways", "-v", "in.html"]).unwrap();
        assert!(build_config(&cli).verbosity.is_verbose());

        let cli = Cli::try_parse_from(["sideways", "-q", "in.html"]).unwrap();
        assert!(build_config(&cli).verbosity.is_quiet());
    }

    #[test]
    fn missing_input_errors() {
        let cli = Cli::try_parse_from(["sideways", "no-such-file.html"]).unwrap();
        assert!(matches!(run(&cli), Err(CliError::InputNotFound(_))));
    }
}
