use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::DistError;

static VERSION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<version>(.*?)</version>").expect("version pattern"));

/// Reads the project version from the first `<version>` tag of the descriptor.
pub fn resolve_version(descriptor: &Path) -> Result<String, DistError> {
    let contents = std::fs::read_to_string(descriptor)?;
    let version = extract_version(&contents)
        .ok_or_else(|| DistError::VersionNotFound(descriptor.to_path_buf()))?;

    tracing::info!("{} version: {version}", crate::config::TOOL_NAME);
    Ok(version)
}

fn extract_version(contents: &str) -> Option<String> {
    VERSION_TAG
        .captures(contents)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
