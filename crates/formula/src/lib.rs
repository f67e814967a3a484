//! Homebrew formula rendering for tapgen.
//!
//! This crate renders a formula template with a release version and
//! per-platform binary checksums and writes the result into the tap.
//!
//! # Features
//!
//! - Substitution-only ERB subset with `trim_mode: '-'` whitespace handling
//! - Precondition checks before any filesystem mutation
//! - Recursive output-directory creation, deterministic overwriting writes
//!
//! # Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use std::path::PathBuf;
//! use tapgen_formula::{GenerationRequest, PlatformKey, generate};
//!
//! let mut checksums = HashMap::new();
//! checksums.insert(PlatformKey::DarwinArm64, "abc123".to_string());
//!
//! let written = generate(&GenerationRequest {
//!     template_path: PathBuf::from("../homebrew-tap/Formula/tapgen.rb.erb"),
//!     output_path: PathBuf::from("../homebrew-tap/Formula/tapgen.rb"),
//!     version: "1.2.3".to_string(),
//!     checksums,
//! })?;
//! # Ok::<(), tapgen_formula::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

mod error;
mod generate;
mod platform;
mod template;

pub use error::{Error, Result};
pub use generate::{GenerationRequest, WrittenFile, generate};
pub use platform::PlatformKey;
pub use template::render;
