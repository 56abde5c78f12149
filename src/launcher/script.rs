use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Target;
use crate::error::DistError;

const BATCH_ANCHOR: &str = r"(?mR)^set REPO=.*$";
const SHELL_ANCHOR: &str = r"(?mR)^BASEDIR=.*$";

static BATCH_ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BATCH_ANCHOR).expect("batch anchor pattern"));
static SHELL_ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SHELL_ANCHOR).expect("shell anchor pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptDialect {
    /// Windows batch files (`ltex-ls.bat`).
    Batch,
    /// POSIX shell scripts (`ltex-ls`).
    Shell,
}

impl ScriptDialect {
    pub fn for_target(target: &Target) -> Self {
        if target.is_windows() {
            ScriptDialect::Batch
        } else {
            ScriptDialect::Shell
        }
    }

    pub fn other(&self) -> Self {
        match self {
            ScriptDialect::Batch => ScriptDialect::Shell,
            ScriptDialect::Shell => ScriptDialect::Batch,
        }
    }

    /// Server and CLI launchers, in that order.
    pub fn script_names(&self) -> [&'static str; 2] {
        match self {
            ScriptDialect::Batch => ["ltex-ls.bat", "ltex-cli.bat"],
            ScriptDialect::Shell => ["ltex-ls", "ltex-cli"],
        }
    }

    /// Command the companion CLI uses to start the server.
    pub fn server_command_line(&self) -> &'static str {
        match self {
            ScriptDialect::Batch => "ltex-ls.bat",
            ScriptDialect::Shell => "./ltex-ls",
        }
    }

    /// The line on which the script computes its own base directory.
    pub fn anchor(&self) -> &'static str {
        match self {
            ScriptDialect::Batch => BATCH_ANCHOR,
            ScriptDialect::Shell => SHELL_ANCHOR,
        }
    }

    fn anchor_regex(&self) -> &'static Regex {
        match self {
            ScriptDialect::Batch => &*BATCH_ANCHOR_RE,
            ScriptDialect::Shell => &*SHELL_ANCHOR_RE,
        }
    }

    fn line_ending(&self) -> &'static str {
        match self {
            ScriptDialect::Batch => "\r\n",
            ScriptDialect::Shell => "\n",
        }
    }

    /// `JAVA_HOME` default pointing at `runtime_dir` below the script's base
    /// directory, without line terminator.
    pub fn java_home_default(&self, runtime_dir: &str) -> String {
        match self {
            ScriptDialect::Batch => {
                format!("if not defined JAVA_HOME set JAVA_HOME=\"%BASEDIR%\\{runtime_dir}\"")
            }
            ScriptDialect::Shell => {
                format!("[ -z \"$JAVA_HOME\" ] && JAVA_HOME=\"$BASEDIR\"/{runtime_dir}")
            }
        }
    }
}

/// Inserts the `JAVA_HOME` default right after the first anchor line.
///
/// Returns `None` when the anchor is missing. The inserted line takes the
/// anchor line's terminator.
pub fn insert_java_home_default(
    script: &str,
    dialect: ScriptDialect,
    runtime_dir: &str,
) -> Option<String> {
    let anchor = dialect.anchor_regex().find(script)?;

    let (head, rest) = script.split_at(anchor.end());
    let newline = if rest.starts_with("\r\n") {
        "\r\n"
    } else if rest.starts_with('\n') {
        "\n"
    } else {
        dialect.line_ending()
    };

    let line = dialect.java_home_default(runtime_dir);
    let mut patched = String::with_capacity(script.len() + newline.len() + line.len());
    patched.push_str(head);
    patched.push_str(newline);
    patched.push_str(&line);
    patched.push_str(rest);
    Some(patched)
}

/// Patches the script at `path` in place, keeping its permissions.
pub fn patch_script(
    path: &Path,
    dialect: ScriptDialect,
    runtime_dir: &str,
) -> Result<(), DistError> {
    if !path.is_file() {
        return Err(DistError::ScriptNotFound(path.to_path_buf()));
    }

    let script = std::fs::read_to_string(path)?;
    let patched = insert_java_home_default(&script, dialect, runtime_dir).ok_or_else(|| {
        DistError::AnchorNotFound {
            script: path.to_path_buf(),
            anchor: dialect.anchor(),
        }
    })?;

    std::fs::write(path, patched)?;
    tracing::debug!("patched {}", path.display());
    Ok(())
}
