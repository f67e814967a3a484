//! Release parameters and fixed tap locations.
//!
//! All environment access happens here, in one step at startup; the rest of
//! the program works from the returned [`Params`] value. The template and
//! output locations are fixed relative to the project root and are not
//! configurable.

use crate::cli::CliError;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tapgen_formula::{GenerationRequest, PlatformKey};
use tracing::debug;

/// Formula directory inside the tap checkout, relative to the project root.
pub const TAP_FORMULA_DIR: &str = "../homebrew-tap/Formula";
/// Template file name inside the formula directory.
pub const TEMPLATE_FILE: &str = "tapgen.rb.erb";
/// Rendered formula file name inside the formula directory.
pub const OUTPUT_FILE: &str = "tapgen.rb";
/// Environment variable carrying the release version.
pub const VERSION_VAR: &str = "VER";

/// Release parameters read from the process environment.
#[derive(Debug, Clone)]
pub struct Params {
    /// The release version (`VER`).
    pub version: String,
    /// Per-platform checksums; platforms whose variable is unset are absent.
    pub checksums: HashMap<PlatformKey, String>,
}

impl Params {
    /// Read the release parameters from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `VER` is unset or empty.
    pub fn from_env() -> Result<Self, CliError> {
        let version = std::env::var(VERSION_VAR).unwrap_or_default();
        if version.is_empty() {
            return Err(CliError::config_with_help(
                "VER environment variable not set",
                "Set VER to the release version, e.g. VER=1.2.3 tapgen",
            ));
        }

        let mut checksums = HashMap::new();
        for key in PlatformKey::all() {
            if let Ok(sha) = std::env::var(key.env_var()) {
                checksums.insert(*key, sha);
            } else {
                debug!(platform = %key, "Checksum not supplied, will render empty");
            }
        }
        debug!(
            version = %version,
            checksums = checksums.len(),
            "Loaded release parameters"
        );

        Ok(Self { version, checksums })
    }

    /// Build the generation request against the fixed tap locations under
    /// `project_root`.
    #[must_use]
    pub fn into_request(self, project_root: &Path) -> GenerationRequest {
        let formula_dir = resolve(project_root, TAP_FORMULA_DIR);
        GenerationRequest {
            template_path: formula_dir.join(TEMPLATE_FILE),
            output_path: formula_dir.join(OUTPUT_FILE),
            version: self.version,
            checksums: self.checksums,
        }
    }
}

/// Join `relative` onto `root` and resolve `.`/`..` components lexically,
/// so reported paths read like real locations rather than `a/../b` chains.
fn resolve(root: &Path, relative: &str) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in root.join(relative).components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            comp => out.push(comp.as_os_str()),
        }
    }
    out
}
