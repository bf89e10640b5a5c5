mod backend;
mod cli;
mod client;
mod config;
mod context;
mod installer;
mod logging;
mod planner;
mod prompt;
mod render;
mod trip;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();
    logging::init(cli.verbose);
    cli.run().await
}
