pub mod lsp_cli;
pub mod script;

use std::path::Path;

use crate::config::Target;
use crate::error::DistError;

use script::ScriptDialect;

/// Makes the launchers in `<dist_dir>/bin` default to the bundled runtime:
/// drops the other platform's scripts, patches the remaining two and points
/// `.lsp-cli.json` at the server script.
pub fn prepare_launchers(
    dist_dir: &Path,
    target: &Target,
    runtime_dir: &str,
) -> Result<(), DistError> {
    let bin_dir = dist_dir.join("bin");
    let dialect = ScriptDialect::for_target(target);

    for name in dialect.other().script_names() {
        let path = bin_dir.join(name);
        if !path.is_file() {
            return Err(DistError::ScriptNotFound(path));
        }
        std::fs::remove_file(&path)?;
    }

    tracing::info!("setting default for JAVA_HOME in startup scripts");
    for name in dialect.script_names() {
        script::patch_script(&bin_dir.join(name), dialect, runtime_dir)?;
    }

    tracing::info!("setting script name in {}", lsp_cli::LSP_CLI_CONFIG);
    lsp_cli::set_server_command_line(
        &bin_dir.join(lsp_cli::LSP_CLI_CONFIG),
        dialect.server_command_line(),
    )?;

    Ok(())
}
