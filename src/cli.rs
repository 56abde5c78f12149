use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_JAVA_VERSION;

#[derive(Debug, Parser)]
#[command(
    name = "ltex-ls-dist",
    version,
    about = "Package LTeX LS with a bundled Java runtime for each platform"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the binary archives
    Build {
        #[command(flatten)]
        project: ProjectArgs,

        /// Path to the jlink executable used to trim the JDK
        #[arg(long, default_value = "jlink")]
        jlink: PathBuf,
    },
    /// Show what `build` would download and write, without doing it
    Plan {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// List the supported targets
    Targets,
}

#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Directory containing pom.xml
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Directory holding ltex-ls-<version>.tar.gz and receiving the archives
    /// [default: <project-dir>/target]
    #[arg(long)]
    pub target_dir: Option<PathBuf>,

    /// Temurin JDK release to bundle
    #[arg(long, default_value = DEFAULT_JAVA_VERSION)]
    pub java_version: String,

    /// Only build these targets (e.g. linux-x64, windows-x86-32); repeatable
    #[arg(long = "target", value_name = "PLATFORM-ARCH")]
    pub targets: Vec<String>,
}
