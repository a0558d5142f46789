//! # pancard CLI entry point
//!
//! Parses command-line arguments, initializes logging, and dispatches to
//! the check handler.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pancard_cli::check::{run_check, CheckArgs};

/// Validate and decode Indian PAN card numbers.
///
/// Checks the `AAAAA9999A` format, explains each character, and reports the
/// holder type. Format checks only: no registry lookup is performed.
#[derive(Parser, Debug)]
#[command(name = "pancard", version, about, long_about = None)]
struct Cli {
    /// Enable logging to stderr. Repeat for more verbosity. Long form only:
    /// `-v` selects validate mode.
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    check: CheckArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("pancard CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();
    match run_check(&cli.check, &mut stdout) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
