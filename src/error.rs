use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistError {
    #[error("no <version> tag found in {0}")]
    VersionNotFound(PathBuf),

    #[error("distribution archive not found: {0}")]
    DistributionNotFound(PathBuf),

    #[error("distribution archive did not unpack to {0}")]
    DistributionLayout(PathBuf),

    #[error("JDK download failed: {0}")]
    JdkDownload(String),

    #[error("unknown archive format: {0}")]
    UnknownArchive(PathBuf),

    #[error("failed to run jlink: {0}")]
    JlinkSpawn(String),

    #[error("jlink exited with {status}: {stderr}", status = describe_exit(.code))]
    JlinkFailed { code: Option<i32>, stderr: String },

    #[error("jlink did not create a runtime image at {0}")]
    RuntimeImageMissing(PathBuf),

    #[error("startup script not found: {0}")]
    ScriptNotFound(PathBuf),

    #[error("anchor `{anchor}` not found in {script}")]
    AnchorNotFound { script: PathBuf, anchor: &'static str },

    #[error("invalid {path}: {reason}")]
    LspCliConfig { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
