//! # edgeip-cli
//!
//! The `edgeip` batch job: fetch four public latency tables of Cloudflare
//! edge IPs, keep the unique sub-threshold set, write it to a hand-off file,
//! then replace the target hostname's A records with the surviving IPs.

pub mod args;
pub mod config;
pub mod handoff;
pub mod pipeline;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the batch job end to end.
pub async fn run() -> Result<()> {
    // .env is optional; real deployments set the variables directly
    dotenvy::dotenv().ok();

    let cli = args::Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = config::Config::from(cli);
    pipeline::run(&config).await
}
