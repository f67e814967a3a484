//! Error types for formula generation.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for formula generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering and writing a formula.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The formula template does not exist at the resolved path.
    #[error("Template not found: {}", path.display())]
    #[diagnostic(
        code(tapgen::formula::template_not_found),
        help("Check that the tap checkout sits next to this repository and contains the .erb template")
    )]
    TemplateNotFound {
        /// The resolved template path that was checked
        path: PathBuf,
    },

    /// A required generation parameter is absent or empty.
    #[error("Missing required parameter: {name}")]
    #[diagnostic(
        code(tapgen::formula::missing_parameter),
        help("Required parameters must be present and non-empty")
    )]
    MissingParameter {
        /// The parameter that was missing
        name: String,
    },

    /// Reading the template from disk failed.
    #[error("Read failed: {message}{}", path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    #[diagnostic(
        code(tapgen::formula::read),
        help("Check that the template is a readable UTF-8 file")
    )]
    Read {
        /// The error message
        message: String,
        /// The path that caused the error
        path: Option<PathBuf>,
        /// The underlying source error
        #[source]
        source: Option<std::io::Error>,
    },

    /// The template text could not be rendered.
    #[error("Template error: {message}{}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    #[diagnostic(
        code(tapgen::formula::template),
        help("Check the template's directives against the supported substitution set")
    )]
    Template {
        /// The error message
        message: String,
        /// The template path, when known
        path: Option<PathBuf>,
    },

    /// Writing the rendered formula (or creating its directories) failed.
    #[error("Write failed: {message}{}", path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    #[diagnostic(
        code(tapgen::formula::write),
        help("Check permissions and free space under the tap checkout")
    )]
    Write {
        /// The error message
        message: String,
        /// The path that caused the error
        path: Option<PathBuf>,
        /// The underlying source error
        #[source]
        source: Option<std::io::Error>,
    },
}

impl Error {
    /// Create a new template-not-found error.
    #[must_use]
    pub fn template_not_found(path: PathBuf) -> Self {
        Self::TemplateNotFound { path }
    }

    /// Create a new missing-parameter error.
    #[must_use]
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    /// Create a new read error with source.
    #[must_use]
    pub fn read_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Read {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    /// Create a new template rendering error.
    #[must_use]
    pub fn template(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Template {
            message: message.into(),
            path,
        }
    }

    /// Create a new write error with source.
    #[must_use]
    pub fn write_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Write {
            message: message.into(),
            path,
            source: Some(source),
        }
    }
}
