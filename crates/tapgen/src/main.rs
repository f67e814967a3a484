//! tapgen CLI entry point.
//!
//! One sequential pipeline per invocation: parse arguments, load the release
//! parameters from the environment, render the formula template, write the
//! result into the tap checkout, and report the written path.

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stdout, clippy::print_stderr)]

use tapgen::cli::{self, CliError, EXIT_OK, exit_code_for, render_error};
use tapgen::config::Params;

fn main() {
    // Diagnostic logging goes to stderr; stdout carries only the
    // confirmation line. Ignore the error if a subscriber is already
    // installed (e.g., in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    // --help/--version exit during parsing; VER is not consulted until run()
    let _cli = cli::parse();

    let exit_code = match run() {
        Ok(()) => EXIT_OK,
        Err(err) => {
            render_error(&err);
            exit_code_for(&err)
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<(), CliError> {
    let params = Params::from_env()?;
    let project_root = std::env::current_dir()
        .map_err(|e| CliError::config(format!("failed to resolve project root: {e}")))?;

    let written = tapgen_formula::generate(&params.into_request(&project_root))?;
    println!(
        "Wrote formula to {} (VER={})",
        written.path.display(),
        written.version
    );
    Ok(())
}
