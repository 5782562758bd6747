//! edgeip - scrape latency-ranked Cloudflare edge IPs and sync a DNS zone.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    edgeip_cli::run().await
}
