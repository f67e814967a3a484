//! Platform keys for per-platform artifact checksums.

use std::fmt;

/// Platforms a formula carries a binary checksum for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKey {
    /// macOS ARM64 (Apple Silicon)
    DarwinArm64,
    /// macOS `x86_64`
    DarwinX64,
    /// Linux `x86_64`
    LinuxX64,
    /// Linux ARM64/aarch64
    LinuxArm64,
}

impl PlatformKey {
    /// Returns the template variable name this platform's checksum binds to.
    #[must_use]
    pub const fn template_var(&self) -> &'static str {
        match self {
            Self::DarwinArm64 => "darwin_arm_sha",
            Self::DarwinX64 => "darwin_amd_sha",
            Self::LinuxX64 => "linux_amd_sha",
            Self::LinuxArm64 => "linux_arm_sha",
        }
    }

    /// Returns the environment variable the release pipeline supplies the
    /// checksum under.
    #[must_use]
    pub const fn env_var(&self) -> &'static str {
        match self {
            Self::DarwinArm64 => "DARWIN_ARM_SHA",
            Self::DarwinX64 => "DARWIN_AMD_SHA",
            Self::LinuxX64 => "LINUX_AMD_SHA",
            Self::LinuxArm64 => "LINUX_ARM_SHA",
        }
    }

    /// Returns the short identifier (e.g., "darwin-arm64").
    #[must_use]
    pub const fn short_id(&self) -> &'static str {
        match self {
            Self::DarwinArm64 => "darwin-arm64",
            Self::DarwinX64 => "darwin-x64",
            Self::LinuxX64 => "linux-x64",
            Self::LinuxArm64 => "linux-arm64",
        }
    }

    /// Returns all supported platforms.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::DarwinArm64,
            Self::DarwinX64,
            Self::LinuxX64,
            Self::LinuxArm64,
        ]
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}
