//! Runtime configuration.

use crate::args::Cli;
use edgeip_core::SOURCE_URLS;
use std::path::PathBuf;

/// Immutable job configuration, built once at startup and passed by
/// reference to every stage.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cloudflare API token
    pub api_token: String,

    /// Cloudflare zone identifier
    pub zone_id: String,

    /// Hostname whose A records are replaced
    pub domain: String,

    /// Cloudflare account email
    pub email: String,

    /// Source pages to scrape, in fetch order
    pub sources: Vec<String>,

    /// Hand-off file path
    pub output: PathBuf,

    /// Latency cutoff in milliseconds
    pub max_latency_ms: f64,

    /// Whether unlabeled hand-off lines join the DNS update
    pub include_unlabeled: bool,

    /// Whether to stop after writing the hand-off file
    pub skip_dns: bool,

    /// Override of the DNS API base URL (tests only)
    pub api_base: Option<String>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            api_token: cli.api_token,
            zone_id: cli.zone_id,
            domain: cli.domain,
            email: cli.email,
            sources: SOURCE_URLS.iter().map(ToString::to_string).collect(),
            output: cli.output,
            max_latency_ms: cli.max_latency_ms,
            include_unlabeled: cli.include_unlabeled,
            skip_dns: cli.skip_dns,
            api_base: None,
        }
    }
}
