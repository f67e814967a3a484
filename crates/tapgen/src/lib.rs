//! tapgen - render the Homebrew tap formula from release parameters
//!
//! The binary in this crate is release-pipeline glue: it reads the release
//! version and per-platform checksums from the environment, renders the
//! fixed formula template in the sibling tap checkout, and writes the
//! result next to it. The rendering itself lives in `tapgen-formula`; this
//! crate owns the process surface (environment loading, fixed paths, exit
//! codes, diagnostics).

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stdout, clippy::print_stderr)]

/// CLI argument parsing, error taxonomy, and exit codes.
pub mod cli;
/// Release parameters and fixed tap locations.
pub mod config;
