use anyhow::Result;
use colored::*;

use crate::client::http_client;
use crate::config::{BackendKind, Config};
use crate::installer::{
    HttpDownloader, Installer, ModelStatus, ProvisionReport, RuntimeStatus, SystemRunner,
};

use super::args::InstallArgs;

pub(crate) async fn handle_install(args: InstallArgs, backend: Option<BackendKind>) -> Result<()> {
    // The hosted API key is irrelevant here, so skip validation.
    let mut config = Config::load_unvalidated()?;
    if let Some(backend) = backend {
        config.backend = backend;
    }

    let model = args.model.unwrap_or_else(|| config.daemon.model.clone());
    provision(&config, &model).await?;
    Ok(())
}

/// Install the model runner if needed and pull `model`, printing what happened.
pub(crate) async fn provision(config: &Config, model: &str) -> Result<ProvisionReport> {
    println!("🔧 Checking local model runner...");

    let downloader = HttpDownloader::new(http_client(&config.http)?);
    let report = Installer::new(&SystemRunner, &downloader, model)
        .with_work_dir(std::env::current_dir()?)
        .ensure_runtime()
        .await?;

    print_report(&report, model);
    Ok(report)
}

fn print_report(report: &ProvisionReport, model: &str) {
    match &report.runtime {
        RuntimeStatus::AlreadyPresent => println!("✅ Model runner already installed"),
        RuntimeStatus::Installed(platform) => {
            println!("✅ Model runner installed for {}", platform.to_string().bold())
        }
    }

    match &report.model {
        ModelStatus::Pulled => println!("✅ Model {} is ready", model.bold()),
        ModelStatus::PullFailed(reason) => {
            println!("{}", format!("⚠️  Could not pull model {model}: {reason}").yellow());
            println!("   Itinerary generation will fail until the model is available.");
        }
    }
}
