//! sideways: convert Selenium IDE recordings into PHPUnit Selenium2 test
//! cases.
//!
//! ## Usage
//!
//! ```bash
//! sideways Login.html                       # single recording
//! sideways recordings/ --dest generated/    # a directory of them
//! sideways suite.side --test-suite Smoke    # one suite from a .side file
//! ```

use clap::Parser;
use sideways_cli::{build_config, run, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Route the converter's diagnostic note stream to stderr, filtered by the
/// requested verbosity.
fn init_tracing(cli: &Cli) {
    let directive = build_config(cli).verbosity.filter_directive();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
