use std::path::Path;
use std::process::Command;

use crate::error::DistError;

/// Modules linked into the bundled runtime.
///
/// Generated from `java --list-modules` of a full JRE. Linking only `java.se`
/// makes LTeX LS crash when started by VS Code ("Unable to invoke no-args
/// constructor for class org.eclipse.lsp4j.SemanticTokensCapabilities"), so
/// keep this list as is.
pub const RUNTIME_MODULES: &[&str] = &["java.se", "java.base"];

#[derive(Debug, PartialEq, Eq)]
pub enum LinkStatus {
    Success,
    Failed { code: Option<i32>, stderr: String },
}

/// Runs jlink once and reports how it exited.
pub fn run_jlink(
    jlink: &Path,
    module_path: &Path,
    output: &Path,
) -> Result<LinkStatus, DistError> {
    let modules = RUNTIME_MODULES.join(",");
    let result = Command::new(jlink)
        .arg("--module-path")
        .arg(module_path)
        .args([
            "--add-modules",
            modules.as_str(),
            "--strip-debug",
            "--no-man-pages",
            "--no-header-files",
            "--compress=2",
            "--output",
        ])
        .arg(output)
        .output()
        .map_err(|e| DistError::JlinkSpawn(format!("{}: {e}", jlink.display())))?;

    if result.status.success() {
        Ok(LinkStatus::Success)
    } else {
        Ok(LinkStatus::Failed {
            code: result.status.code(),
            stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
        })
    }
}

/// Links a stripped runtime image from the JDK modules in `module_path`
/// into `output`.
pub fn create_runtime(jlink: &Path, module_path: &Path, output: &Path) -> Result<(), DistError> {
    if output.exists() {
        std::fs::remove_dir_all(output)?;
    }

    tracing::info!("creating Java distribution with jlink");

    match run_jlink(jlink, module_path, output)? {
        LinkStatus::Success => {}
        LinkStatus::Failed { code, stderr } => {
            return Err(DistError::JlinkFailed { code, stderr });
        }
    }

    if !output.is_dir() {
        return Err(DistError::RuntimeImageMissing(output.to_path_buf()));
    }

    Ok(())
}
