use anyhow::{Context, Result};
use std::io::{self, IsTerminal};

use crate::backend::build_backend;
use crate::config::BackendKind;
use crate::context::WikipediaClient;
use crate::planner::TripPlanner;
use crate::render::{render_banner, render_outcome};

use super::args::PlanArgs;
use super::commands::load_config;
use super::form::collect_request;
use super::install::provision;

pub(crate) async fn handle_plan(args: PlanArgs, backend: Option<BackendKind>) -> Result<()> {
    let config = load_config(backend)?;

    if config.backend == BackendKind::LocalDaemon && config.daemon.auto_install {
        provision(&config, &config.daemon.model).await?;
    }

    let stdin = io::stdin();
    let interactive = args.interactive || (stdin.is_terminal() && !args.has_any_field());

    let mut stdout = io::stdout();
    if interactive {
        render_banner(&mut stdout)?;
    }

    let request = collect_request(args, interactive, &mut stdin.lock(), &mut stdout)?;

    let context = WikipediaClient::new(&config.context, &config.http)?;
    let backend = build_backend(&config)
        .with_context(|| format!("Failed to set up {} backend", config.backend.display_name()))?;

    let outcome = TripPlanner::new(&context, backend.as_ref())
        .plan(&request)
        .await?;

    println!();
    render_outcome(&mut stdout, &outcome)?;
    Ok(())
}
