use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Temurin release bundled by default.
// https://github.com/adoptium/adoptium-support/issues/557
pub const DEFAULT_JAVA_VERSION: &str = "11.0.15+10";

/// GitHub organisation hosting the `temurin<N>-binaries` release repos.
pub const ADOPTIUM_RELEASES: &str = "https://github.com/adoptium";

pub const TOOL_NAME: &str = "ltex-ls";

pub const PROJECT_DESCRIPTOR: &str = "pom.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Mac,
    Windows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Aarch64,
    X86_32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    TarGz,
}

impl ArchiveFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => ".zip",
            ArchiveFormat::TarGz => ".tar.gz",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub platform: Platform,
    pub arch: Arch,
}

impl Target {
    pub const ALL: [Target; 6] = [
        Target::new(Platform::Linux, Arch::X64),
        Target::new(Platform::Linux, Arch::Aarch64),
        Target::new(Platform::Mac, Arch::X64),
        Target::new(Platform::Mac, Arch::Aarch64),
        Target::new(Platform::Windows, Arch::X64),
        Target::new(Platform::Windows, Arch::X86_32),
    ];

    pub const fn new(platform: Platform, arch: Arch) -> Self {
        Self { platform, arch }
    }

    /// Parses names like `linux-x64` or `windows-x86-32`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.to_string() == s)
    }

    pub fn adoptium_os(&self) -> &'static str {
        match self.platform {
            Platform::Linux => "linux",
            Platform::Mac => "mac",
            Platform::Windows => "windows",
        }
    }

    pub fn adoptium_arch(&self) -> &'static str {
        match self.arch {
            Arch::X64 => "x64",
            Arch::Aarch64 => "aarch64",
            Arch::X86_32 => "x86-32",
        }
    }

    pub fn is_windows(&self) -> bool {
        self.platform == Platform::Windows
    }

    pub fn archive_format(&self) -> ArchiveFormat {
        if self.is_windows() {
            ArchiveFormat::Zip
        } else {
            ArchiveFormat::TarGz
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.adoptium_os(), self.adoptium_arch())
    }
}

#[derive(Debug, Clone)]
pub struct DistConfig {
    pub project_dir: PathBuf,
    pub target_dir: PathBuf,
    pub java_version: String,
    pub jlink: PathBuf,
    pub jdk_releases: String,
}

impl DistConfig {
    pub fn new(
        project_dir: PathBuf,
        target_dir: Option<PathBuf>,
        java_version: String,
        jlink: PathBuf,
    ) -> Self {
        let target_dir = target_dir.unwrap_or_else(|| project_dir.join("target"));
        Self {
            project_dir,
            target_dir,
            java_version,
            jlink,
            jdk_releases: ADOPTIUM_RELEASES.to_string(),
        }
    }

    pub fn descriptor_path(&self) -> PathBuf {
        self.project_dir.join(PROJECT_DESCRIPTOR)
    }

    /// Name of the directory the tool distribution unpacks to.
    pub fn distribution_dir_name(version: &str) -> String {
        format!("{TOOL_NAME}-{version}")
    }

    pub fn distribution_archive(&self, version: &str) -> PathBuf {
        self.target_dir.join(format!("{}.tar.gz", Self::distribution_dir_name(version)))
    }

    pub fn binary_archive_stem(&self, version: &str, target: &Target) -> PathBuf {
        self.target_dir.join(format!("{TOOL_NAME}-{version}-{target}"))
    }

    pub fn binary_archive(&self, version: &str, target: &Target) -> PathBuf {
        with_extension_suffix(
            &self.binary_archive_stem(version, target),
            target.archive_format().extension(),
        )
    }
}

/// Appends `suffix` verbatim; `Path::with_extension` would clobber the
/// version's dots.
pub fn with_extension_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_targets_round_trip_through_names() {
        let names: Vec<String> = Target::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(
            names,
            [
                "linux-x64",
                "linux-aarch64",
                "mac-x64",
                "mac-aarch64",
                "windows-x64",
                "windows-x86-32"
            ]
        );
        for target in Target::ALL {
            assert_eq!(Target::parse(&target.to_string()), Some(target));
        }
    }

    #[test]
    fn parse_rejects_unknown_target() {
        assert_eq!(Target::parse("macos-x64"), None);
        assert_eq!(Target::parse("linux-x86-32"), None);
        assert_eq!(Target::parse(""), None);
    }

    #[test]
    fn only_windows_uses_zip() {
        for target in Target::ALL {
            let expected = if target.platform == Platform::Windows {
                ArchiveFormat::Zip
            } else {
                ArchiveFormat::TarGz
            };
            assert_eq!(target.archive_format(), expected);
        }
    }

    #[test]
    fn target_dir_defaults_under_project() {
        let config = DistConfig::new(
            PathBuf::from("/work/ltex-ls"),
            None,
            DEFAULT_JAVA_VERSION.to_string(),
            PathBuf::from("jlink"),
        );
        assert_eq!(config.target_dir, PathBuf::from("/work/ltex-ls/target"));
        assert_eq!(config.jdk_releases, "https://github.com/adoptium");
        assert_eq!(
            config.descriptor_path(),
            PathBuf::from("/work/ltex-ls/pom.xml")
        );
    }

    #[test]
    fn archive_paths_keep_dotted_version() {
        let config = DistConfig::new(
            PathBuf::from("/p"),
            Some(PathBuf::from("/out")),
            DEFAULT_JAVA_VERSION.to_string(),
            PathBuf::from("jlink"),
        );
        assert_eq!(
            config.distribution_archive("16.0.0"),
            PathBuf::from("/out/ltex-ls-16.0.0.tar.gz")
        );
        let windows = Target::new(Platform::Windows, Arch::X86_32);
        assert_eq!(
            config.binary_archive("16.0.0", &windows),
            PathBuf::from("/out/ltex-ls-16.0.0-windows-x86-32.zip")
        );
        let mac = Target::new(Platform::Mac, Arch::Aarch64);
        assert_eq!(
            config.binary_archive("16.0.0", &mac),
            PathBuf::from("/out/ltex-ls-16.0.0-mac-aarch64.tar.gz")
        );
    }
}
