use anyhow::{Context, Result};

use crate::config::{BackendKind, Config};

use super::args::{Cli, Command, PlanArgs};
use super::config_cmd;
use super::install;
use super::plan;

pub(crate) async fn run(cli: Cli) -> Result<()> {
    let backend = cli
        .backend
        .as_deref()
        .map(str::parse::<BackendKind>)
        .transpose()
        .context("Invalid --backend value")?;

    match cli.command {
        Some(Command::Plan(args)) => plan::handle_plan(args, backend).await,
        Some(Command::Install(args)) => install::handle_install(args, backend).await,
        Some(Command::Config(args)) => config_cmd::handle_config(args, backend),
        None => {
            let args = PlanArgs {
                interactive: true,
                ..PlanArgs::default()
            };
            plan::handle_plan(args, backend).await
        }
    }
}

/// Load settings, apply a `--backend` override, then validate.
pub(crate) fn load_config(backend: Option<BackendKind>) -> Result<Config> {
    let Some(backend) = backend else {
        return Config::load();
    };

    let mut config = Config::load_unvalidated()?;
    config.backend = backend;
    config.validate()?;
    Ok(config)
}
