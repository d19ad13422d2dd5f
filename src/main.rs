mod analytics;
mod cli;
mod dataset;
mod error;
mod output;
mod reports;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting DeployLens - Release Deployment Analytics");
    cli.execute()?;

    Ok(())
}
