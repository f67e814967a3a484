//! Formula generation: validate, render, write.

use crate::error::{Error, Result};
use crate::platform::PlatformKey;
use crate::template;
use std::collections::HashMap;
use std::path::PathBuf;

/// Everything needed to render and write one formula.
///
/// Callers construct this once (typically from the process environment) and
/// pass it through; the generation pipeline itself reads no global state.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Path to the ERB-style formula template.
    pub template_path: PathBuf,
    /// Destination path for the rendered formula.
    pub output_path: PathBuf,
    /// Release version bound to `ver`. Must be non-empty.
    pub version: String,
    /// Per-platform checksums; platforms absent from the map render as the
    /// empty string.
    pub checksums: HashMap<PlatformKey, String>,
}

/// Success report for a written formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// The path the formula was written to.
    pub path: PathBuf,
    /// The version that was substituted.
    pub version: String,
}

/// Render the formula template and write the result.
///
/// Preconditions (template present, version non-empty) are checked before
/// any filesystem mutation, so a failed run never leaves output behind.
/// Parent directories of the output path are created as needed; an existing
/// file at the output path is overwritten. Re-running with identical inputs
/// produces byte-identical output.
///
/// # Errors
///
/// Returns [`Error::TemplateNotFound`] if the template path does not exist,
/// [`Error::MissingParameter`] if the version is empty,
/// [`Error::Read`] if the template cannot be read,
/// [`Error::Template`] if rendering fails, and [`Error::Write`] if directory
/// creation or the final write fails.
pub fn generate(request: &GenerationRequest) -> Result<WrittenFile> {
    if !request.template_path.exists() {
        return Err(Error::template_not_found(request.template_path.clone()));
    }
    if request.version.is_empty() {
        return Err(Error::missing_parameter("version"));
    }

    tracing::debug!(
        template = %request.template_path.display(),
        version = %request.version,
        "Rendering formula template"
    );

    let source = std::fs::read_to_string(&request.template_path).map_err(|source| {
        Error::read_with_source(
            "failed to read template",
            Some(request.template_path.clone()),
            source,
        )
    })?;

    let mut bindings = HashMap::new();
    bindings.insert("ver", request.version.as_str());
    for key in PlatformKey::all() {
        bindings.insert(
            key.template_var(),
            request.checksums.get(key).map_or("", String::as_str),
        );
    }
    // The renderer works on text alone; stamp the template path onto its
    // errors here, where the path is known.
    let rendered = template::render(&source, &bindings).map_err(|err| match err {
        Error::Template { message, path: None } => {
            Error::template(message, Some(request.template_path.clone()))
        }
        other => other,
    })?;

    if let Some(parent) = request.output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| {
            Error::write_with_source(
                "failed to create formula directory",
                Some(parent.to_path_buf()),
                source,
            )
        })?;
    }
    std::fs::write(&request.output_path, &rendered).map_err(|source| {
        Error::write_with_source(
            "failed to write formula",
            Some(request.output_path.clone()),
            source,
        )
    })?;

    tracing::info!(
        path = %request.output_path.display(),
        bytes = rendered.len(),
        "Wrote formula"
    );

    Ok(WrittenFile {
        path: request.output_path.clone(),
        version: request.version.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEMPLATE: &str = r#"class Tapgen < Formula
  version "<%= ver %>"
  on_macos do
    sha256 "<%= darwin_arm_sha %>"
    sha256 "<%= darwin_amd_sha %>"
  end
  on_linux do
    sha256 "<%= linux_amd_sha %>"
    sha256 "<%= linux_arm_sha %>"
  end
end
"#;

    fn request_in(dir: &TempDir) -> GenerationRequest {
        let template_path = dir.path().join("tapgen.rb.erb");
        std::fs::write(&template_path, TEMPLATE).unwrap();
        GenerationRequest {
            template_path,
            output_path: dir.path().join("Formula/tapgen.rb"),
            version: "1.2.3".to_string(),
            checksums: HashMap::new(),
        }
    }

    #[test]
    fn test_generate_writes_formula() {
        let dir = TempDir::new().unwrap();
        let mut request = request_in(&dir);
        request
            .checksums
            .insert(PlatformKey::DarwinArm64, "abc123".to_string());

        let written = generate(&request).unwrap();
        assert_eq!(written.path, request.output_path);
        assert_eq!(written.version, "1.2.3");

        let out = std::fs::read_to_string(&request.output_path).unwrap();
        assert!(out.contains("version \"1.2.3\""));
        assert!(out.contains("sha256 \"abc123\""));
    }

    #[test]
    fn test_absent_checksums_render_empty() {
        let dir = TempDir::new().unwrap();
        let mut request = request_in(&dir);
        request
            .checksums
            .insert(PlatformKey::DarwinArm64, "abc123".to_string());

        generate(&request).unwrap();

        let out = std::fs::read_to_string(&request.output_path).unwrap();
        assert_eq!(out.matches("sha256 \"\"").count(), 3);
        assert!(!out.contains("<%="));
    }

    #[test]
    fn test_all_checksums_substituted() {
        let dir = TempDir::new().unwrap();
        let mut request = request_in(&dir);
        for (i, key) in PlatformKey::all().iter().enumerate() {
            request.checksums.insert(*key, format!("digest{i}"));
        }

        generate(&request).unwrap();

        let out = std::fs::read_to_string(&request.output_path).unwrap();
        for i in 0..PlatformKey::all().len() {
            assert!(out.contains(&format!("sha256 \"digest{i}\"")));
        }
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut request = request_in(&dir);
        request
            .checksums
            .insert(PlatformKey::LinuxX64, "f00d".to_string());

        generate(&request).unwrap();
        let first = std::fs::read(&request.output_path).unwrap();
        generate(&request).unwrap();
        let second = std::fs::read(&request.output_path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_overwrites_existing_output() {
        let dir = TempDir::new().unwrap();
        let request = request_in(&dir);
        std::fs::create_dir_all(request.output_path.parent().unwrap()).unwrap();
        std::fs::write(&request.output_path, "stale formula from 0.0.1").unwrap();

        generate(&request).unwrap();

        let out = std::fs::read_to_string(&request.output_path).unwrap();
        assert!(out.contains("version \"1.2.3\""));
        assert!(!out.contains("stale"));
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut request = request_in(&dir);
        request.output_path = dir.path().join("tap/Formula/nested/tapgen.rb");

        generate(&request).unwrap();
        assert!(request.output_path.exists());
    }

    #[test]
    fn test_missing_template_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let request = GenerationRequest {
            template_path: dir.path().join("absent.rb.erb"),
            output_path: dir.path().join("Formula/tapgen.rb"),
            version: "1.2.3".to_string(),
            checksums: HashMap::new(),
        };

        let err = generate(&request).unwrap_err();
        assert!(err.to_string().contains("Template not found"));
        assert!(err.to_string().contains("absent.rb.erb"));
        assert!(!request.output_path.exists());
    }

    #[test]
    fn test_unreadable_template_error_names_path() {
        let dir = TempDir::new().unwrap();
        let request = GenerationRequest {
            // A directory at the template path passes the existence check but
            // fails the read.
            template_path: dir.path().join("tapgen.rb.erb"),
            output_path: dir.path().join("Formula/tapgen.rb"),
            version: "1.2.3".to_string(),
            checksums: HashMap::new(),
        };
        std::fs::create_dir(&request.template_path).unwrap();

        let err = generate(&request).unwrap_err();
        assert!(err.to_string().contains("Read failed"));
        assert!(err.to_string().contains("tapgen.rb.erb"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!request.output_path.exists());
    }

    #[test]
    fn test_empty_version_fails_without_output() {
        let dir = TempDir::new().unwrap();
        let mut request = request_in(&dir);
        request.version = String::new();

        let err = generate(&request).unwrap_err();
        assert!(err.to_string().contains("Missing required parameter"));
        assert!(err.to_string().contains("version"));
        assert!(!request.output_path.exists());
    }

    #[test]
    fn test_template_error_propagates() {
        let dir = TempDir::new().unwrap();
        let mut request = request_in(&dir);
        std::fs::write(&request.template_path, "sha256 \"<%= unknown_sha %>\"\n").unwrap();
        request.version = "1.2.3".to_string();

        let err = generate(&request).unwrap_err();
        assert!(err.to_string().contains("undefined template variable"));
        assert!(err.to_string().contains("tapgen.rb.erb"));
        assert!(!request.output_path.exists());
    }
}
