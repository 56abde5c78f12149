use std::path::Path;

use serde_json::Value;

use crate::error::DistError;

pub const LSP_CLI_CONFIG: &str = ".lsp-cli.json";

const DEFAULT_VALUES: &str = "defaultValues";
const SERVER_COMMAND_LINE: &str = "--server-command-line";

/// Sets `defaultValues["--server-command-line"]`, leaving every other key
/// (and the key order) untouched.
pub fn set_server_command_line(path: &Path, command: &str) -> Result<(), DistError> {
    let contents = std::fs::read_to_string(path)?;
    let mut json: Value = serde_json::from_str(&contents)?;

    let defaults = json
        .get_mut(DEFAULT_VALUES)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| DistError::LspCliConfig {
            path: path.to_path_buf(),
            reason: format!("missing `{DEFAULT_VALUES}` object"),
        })?;
    defaults.insert(SERVER_COMMAND_LINE.to_string(), Value::String(command.to_string()));

    std::fs::write(path, serde_json::to_string_pretty(&json)?)?;
    tracing::debug!("{SERVER_COMMAND_LINE} = {command}");
    Ok(())
}
