//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Scrape latency-ranked Cloudflare edge IPs and sync them into a DNS zone
///
/// The job fetches four public latency tables, deduplicates and filters the
/// scraped IPs, writes the survivors to a hand-off file, then clears and
/// recreates the target hostname's A records through the Cloudflare API.
#[derive(Parser, Debug)]
#[command(name = "edgeip")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Cloudflare API token
    #[arg(long, env = "CF_API_KEY", hide_env_values = true)]
    pub api_token: String,

    /// Cloudflare zone identifier
    #[arg(long, env = "CF_ZONE_ID")]
    pub zone_id: String,

    /// Hostname whose A records are replaced
    #[arg(long, env = "CF_DOMAIN_NAME")]
    pub domain: String,

    /// Cloudflare account email
    #[arg(long, env = "CF_API_EMAIL")]
    pub email: String,

    /// Hand-off file written between the filter and DNS phases
    #[arg(long, default_value = "edge_ips.txt")]
    pub output: PathBuf,

    /// Latency cutoff in milliseconds (records at or above are dropped)
    #[arg(long, default_value_t = 100.0)]
    pub max_latency_ms: f64,

    /// Also sync IPs whose records carry no line label
    ///
    /// By default only `<ip>#<label>-<latency>ms` lines reach the DNS
    /// phase; unlabeled `<ip>-<latency>ms` lines are written to the
    /// hand-off file but excluded from the update.
    #[arg(long)]
    pub include_unlabeled: bool,

    /// Scrape and write the hand-off file, but skip the DNS update
    #[arg(long)]
    pub skip_dns: bool,

    /// Increase verbosity
    #[arg(short, long)]
    pub verbose: bool,
}
