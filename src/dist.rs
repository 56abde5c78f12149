use std::path::{Path, PathBuf};

use crate::config::{DistConfig, Target};
use crate::error::DistError;
use crate::{jvm, launcher, pack, unpack};

/// Builds the binary archive for one target in its own scratch directory.
pub async fn package_target(
    config: &DistConfig,
    client: &reqwest::Client,
    version: &str,
    target: &Target,
) -> Result<PathBuf, DistError> {
    tracing::info!("processing platform/arch '{target}'");

    let scratch = tempfile::tempdir()?;
    let dist_dir = unpack_distribution(config, version, scratch.path())?;
    let runtime_dir =
        jvm::provision_runtime(config, client, scratch.path(), &dist_dir, target).await?;

    finish_target(config, version, target, scratch.path(), &dist_dir, &runtime_dir)
}

/// Unpacks `ltex-ls-<version>.tar.gz` into `scratch` and returns the
/// distribution directory.
pub fn unpack_distribution(
    config: &DistConfig,
    version: &str,
    scratch: &Path,
) -> Result<PathBuf, DistError> {
    let archive = config.distribution_archive(version);
    if !archive.is_file() {
        return Err(DistError::DistributionNotFound(archive));
    }

    tracing::info!("extracting {}", archive.display());
    unpack::extract_tar_gz(&archive, scratch)?;

    let dist_dir = scratch.join(DistConfig::distribution_dir_name(version));
    if !dist_dir.is_dir() {
        return Err(DistError::DistributionLayout(dist_dir));
    }
    Ok(dist_dir)
}

/// Patches the launchers for the bundled runtime and archives `scratch`.
pub fn finish_target(
    config: &DistConfig,
    version: &str,
    target: &Target,
    scratch: &Path,
    dist_dir: &Path,
    runtime_dir: &str,
) -> Result<PathBuf, DistError> {
    launcher::prepare_launchers(dist_dir, target, runtime_dir)?;

    pack::create_binary_archive(
        scratch,
        &config.binary_archive_stem(version, target),
        target.archive_format(),
    )
}
