pub mod adoptium;
pub mod download;

use std::path::{Path, PathBuf};

use crate::config::{DistConfig, Platform, Target};
use crate::error::DistError;
use crate::{jlink, unpack};

use adoptium::JdkRelease;

/// Downloads the target's JDK, links a stripped runtime image into
/// `dist_dir` and removes the JDK again.
///
/// Returns the runtime image's directory name relative to `dist_dir`.
pub async fn provision_runtime(
    config: &DistConfig,
    client: &reqwest::Client,
    scratch: &Path,
    dist_dir: &Path,
    target: &Target,
) -> Result<String, DistError> {
    let release = JdkRelease::for_target(&config.jdk_releases, &config.java_version, target);
    let archive_path = dist_dir.join(&release.archive_name);

    download::download_jdk(client, &release.url, &archive_path).await?;

    tracing::info!("extracting JDK archive");
    unpack::extract(&archive_path, scratch)?;

    tracing::info!("removing JDK archive");
    std::fs::remove_file(&archive_path)?;

    let runtime_dir_name = release.home_dir_name();
    let jdk_path = scratch.join(&runtime_dir_name);
    let runtime_path = dist_dir.join(&runtime_dir_name);

    let module_path = jmods_dir(&jdk_path, target.platform);
    jlink::create_runtime(&config.jlink, &module_path, &runtime_path)?;
    tracing::info!("runtime created at {}", runtime_path.display());

    tracing::info!("removing JDK directory");
    std::fs::remove_dir_all(&jdk_path)?;

    Ok(runtime_dir_name)
}

pub fn jmods_dir(jdk_path: &Path, platform: Platform) -> PathBuf {
    // macOS JDK has Contents/Home structure
    match platform {
        Platform::Mac => jdk_path.join("Contents").join("Home").join("jmods"),
        Platform::Linux | Platform::Windows => jdk_path.join("jmods"),
    }
}
