use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::trip::{Budget, FormError};

use super::commands;

/// Entry point for the `wayfare` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "wayfare",
    about = "AI-powered travel planner: trip details in, day-by-day itinerary out",
    version,
    long_about = None
)]
pub struct Cli {
    /// Optional subcommand; without one, wayfare asks for the trip details interactively.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Override the configured backend (hosted, pipeline or daemon)
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate an itinerary for a trip.
    Plan(PlanArgs),
    /// Install the local model runner and pull the configured model.
    Install(InstallArgs),
    /// Show or update saved settings.
    Config(ConfigArgs),
}

#[derive(Debug, Default, Args)]
pub struct PlanArgs {
    /// Starting location
    #[arg(long)]
    pub origin: Option<String>,

    /// Destination (also used for the Wikipedia lookup)
    #[arg(long)]
    pub destination: Option<String>,

    /// Budget tier: low, moderate or luxury
    #[arg(long, value_parser = parse_budget)]
    pub budget: Option<Budget>,

    /// Trip duration in days (1-30)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=30))]
    pub duration: Option<u32>,

    /// Purpose of the trip
    #[arg(long)]
    pub purpose: Option<String>,

    /// Preferences, e.g. "adventure, food, history"
    #[arg(long)]
    pub preferences: Option<String>,

    /// Prompt for any field not given as a flag
    #[arg(short = 'i', long)]
    pub interactive: bool,
}

impl PlanArgs {
    pub fn has_any_field(&self) -> bool {
        self.origin.is_some()
            || self.destination.is_some()
            || self.budget.is_some()
            || self.duration.is_some()
            || self.purpose.is_some()
            || self.preferences.is_some()
    }
}

#[derive(Debug, Default, Args)]
pub struct InstallArgs {
    /// Model to pull after installing (defaults to the configured daemon model)
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    /// Set the hosted backend API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Set the hosted chat model
    #[arg(long)]
    pub hosted_model: Option<String>,

    /// Set the local text-generation server URL
    #[arg(long)]
    pub pipeline_url: Option<String>,

    /// Set the local model daemon URL
    #[arg(long)]
    pub daemon_url: Option<String>,

    /// Set the model pulled and used by the local daemon
    #[arg(long)]
    pub daemon_model: Option<String>,

    /// Install the model runner automatically before planning with the daemon backend
    #[arg(long)]
    pub auto_install: Option<bool>,

    /// Set the destination summary endpoint
    #[arg(long)]
    pub context_url: Option<String>,

    /// Set the HTTP timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl ConfigArgs {
    pub fn has_updates(&self) -> bool {
        self.api_key.is_some()
            || self.hosted_model.is_some()
            || self.pipeline_url.is_some()
            || self.daemon_url.is_some()
            || self.daemon_model.is_some()
            || self.auto_install.is_some()
            || self.context_url.is_some()
            || self.timeout.is_some()
    }
}

fn parse_budget(raw: &str) -> Result<Budget, FormError> {
    raw.parse()
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        commands::run(self).await
    }
}
