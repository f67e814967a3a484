//! CLI surface: argument parsing, error taxonomy, exit codes.

use clap::Parser;
use miette::{Diagnostic, Report};
use std::io::{self, Write};
use thiserror::Error;

/// Exit code for success.
pub const EXIT_OK: i32 = 0;
/// Configuration error exit code (missing or invalid release parameters).
pub const EXIT_CONFIG: i32 = 2;
/// Generation error exit code (template, render, or write failure).
pub const EXIT_GENERATE: i32 = 3;

/// Command-line arguments.
///
/// tapgen takes no positional arguments and no subcommands; everything it
/// needs arrives through the environment (see `config`). clap still gives
/// us `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(name = "tapgen")]
#[command(about = "Render the Homebrew tap formula from release parameters")]
#[command(version)]
pub struct Cli {}

/// Parse command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// CLI-specific error types with proper exit code mapping
#[derive(Error, Debug, Clone, Diagnostic)]
pub enum CliError {
    /// Configuration error (exit code 2)
    #[error("Configuration error: {message}")]
    #[diagnostic(code(tapgen::cli::config))]
    Config {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
    /// Formula generation error (exit code 3)
    #[error("Generation error: {message}")]
    #[diagnostic(code(tapgen::cli::generate))]
    Generate {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
}

impl CliError {
    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }

    /// Create a new configuration error with help text
    #[must_use]
    pub fn config_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Create a new generation error
    #[must_use]
    pub fn generate(message: impl Into<String>) -> Self {
        Self::Generate {
            message: message.into(),
            help: None,
        }
    }
}

/// Convert a formula error into the generation category, carrying over any
/// help text its diagnostic provides.
impl From<tapgen_formula::Error> for CliError {
    fn from(err: tapgen_formula::Error) -> Self {
        let help = err.help().map(|h| h.to_string());
        // Flattening to text severs the io::Error chain, so fold the OS
        // cause into the message the report shows.
        let message = match &err {
            tapgen_formula::Error::Read {
                source: Some(source),
                ..
            }
            | tapgen_formula::Error::Write {
                source: Some(source),
                ..
            } => format!("{err}: {source}"),
            _ => err.to_string(),
        };
        Self::Generate { message, help }
    }
}

/// Map CLI error to appropriate exit code
#[must_use]
pub const fn exit_code_for(err: &CliError) -> i32 {
    match err {
        CliError::Config { .. } => EXIT_CONFIG,
        CliError::Generate { .. } => EXIT_GENERATE,
    }
}

/// Render an error as a human-friendly miette report on stderr.
pub fn render_error(err: &CliError) {
    let report = Report::new(err.clone());
    eprintln!("{report:?}");
    // Ensure output is flushed before potential process exit
    let _ = io::stderr().flush();
}
