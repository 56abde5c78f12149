use crate::config::Target;

/// A Temurin JDK build for one target, addressed by its GitHub release asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdkRelease {
    pub version: String,
    pub archive_name: String,
    pub url: String,
}

impl JdkRelease {
    /// `releases_base` is the Adoptium organisation URL, normally
    /// [`crate::config::ADOPTIUM_RELEASES`].
    pub fn for_target(releases_base: &str, java_version: &str, target: &Target) -> Self {
        let feature = feature_version(java_version);
        let archive_name = format!(
            "OpenJDK{feature}U-jdk_{arch}_{os}_hotspot_{build}{ext}",
            arch = target.adoptium_arch(),
            os = target.adoptium_os(),
            build = java_version.replace('+', "_"),
            ext = target.archive_format().extension(),
        );
        let url = format!(
            "{base}/temurin{feature}-binaries/releases/download/jdk-{tag}/{archive_name}",
            base = releases_base.trim_end_matches('/'),
            tag = urlencoding::encode(java_version),
        );

        Self {
            version: java_version.to_string(),
            archive_name,
            url,
        }
    }

    /// Top-level directory of the unpacked JDK, reused as the name of the
    /// bundled runtime image.
    pub fn home_dir_name(&self) -> String {
        format!("jdk-{}", self.version)
    }
}

/// `11.0.15+10` -> `11`
fn feature_version(java_version: &str) -> &str {
    java_version
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or(java_version)
}
