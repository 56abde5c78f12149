mod cli;
mod config;
mod dist;
mod error;
mod jlink;
mod jvm;
mod launcher;
mod pack;
mod unpack;
mod version;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::HumanBytes;
use tracing_subscriber::filter::Directive;

use cli::{Cli, Command, ProjectArgs};
use config::{DistConfig, Target};
use jvm::adoptium::JdkRelease;

const USER_AGENT: &str = concat!("ltex-ls-dist/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ltex_ls_dist=info".parse::<Directive>()?),
        )
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build { project, jlink } => {
            let targets = select_targets(&project.targets)?;
            let config = dist_config(project, jlink);
            run_build(&config, &targets).await?;
        }
        Command::Plan { project } => {
            let targets = select_targets(&project.targets)?;
            let config = dist_config(project, "jlink".into());
            run_plan(&config, &targets)?;
        }
        Command::Targets => {
            for target in Target::ALL {
                println!("{target}");
            }
        }
    }

    Ok(())
}

fn dist_config(project: ProjectArgs, jlink: PathBuf) -> DistConfig {
    DistConfig::new(project.project_dir, project.target_dir, project.java_version, jlink)
}

/// All targets in their fixed order, or the named subset in that same order.
fn select_targets(names: &[String]) -> Result<Vec<Target>> {
    if names.is_empty() {
        return Ok(Target::ALL.to_vec());
    }

    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        match Target::parse(name) {
            Some(target) => selected.push(target),
            None => {
                let known: Vec<String> = Target::ALL.iter().map(|t| t.to_string()).collect();
                bail!("invalid target: {name}. Use: {}", known.join(", "));
            }
        }
    }

    Ok(Target::ALL
        .into_iter()
        .filter(|t| selected.contains(t))
        .collect())
}

async fn run_build(config: &DistConfig, targets: &[Target]) -> Result<()> {
    let version = version::resolve_version(&config.descriptor_path())?;
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("failed to create HTTP client")?;

    let mut outputs = Vec::with_capacity(targets.len());
    for target in targets {
        let output = dist::package_target(config, &client, &version, target)
            .await
            .with_context(|| format!("failed to package {target}"))?;
        outputs.push(output);
    }

    eprintln!();
    for output in &outputs {
        let size = std::fs::metadata(output)?.len();
        eprintln!("  {} ({})", output.display(), HumanBytes(size));
    }
    eprintln!("\n  {} archives ready.\n", outputs.len());

    Ok(())
}

fn run_plan(config: &DistConfig, targets: &[Target]) -> Result<()> {
    let version = version::resolve_version(&config.descriptor_path())?;
    eprintln!("Input archive: {}", config.distribution_archive(&version).display());

    for target in targets {
        let release = JdkRelease::for_target(&config.jdk_releases, &config.java_version, target);
        eprintln!("\n{target}");
        eprintln!("  JDK:     {}", release.url);
        eprintln!("  Runtime: {}", release.home_dir_name());
        eprintln!("  Output:  {}", config.binary_archive(&version, target).display());
    }

    Ok(())
}
