//! The end-to-end batch pipeline, strictly sequential.

use crate::config::Config;
use crate::handoff;
use anyhow::Result;
use edgeip_core::{aggregate, Site};
use edgeip_dns::{CloudflareClient, Reconciler};
use edgeip_scrape::{build_client, extract_records, fetch_page};
use tracing::{info, warn};

/// Fetch one source and return its serialized records.
///
/// Fetch failures and unknown URLs both mean the site contributes nothing;
/// only the fetch failure is worth a log line.
async fn scrape_source(client: &reqwest::Client, url: &str) -> Vec<String> {
    let Some(site) = Site::for_url(url) else {
        warn!(url, "no extraction rule for source, skipping");
        return Vec::new();
    };

    let body = match fetch_page(client, url).await {
        Ok(body) => body,
        Err(e) => {
            warn!(url, error = %e, "fetch failed, taking zero records from this source");
            return Vec::new();
        }
    };

    extract_records(site, &body)
        .iter()
        .map(edgeip_core::ScoredRecord::serialized)
        .collect()
}

/// Run the whole job: scrape, filter, hand off, reconcile.
pub async fn run(config: &Config) -> Result<()> {
    info!("collecting Cloudflare edge IP latency data");

    let client = build_client()?;
    let mut all_records = Vec::new();

    for url in &config.sources {
        info!(url, "processing source");
        let records = scrape_source(&client, url).await;
        info!(url, count = records.len(), "records scraped");
        all_records.extend(records);
    }

    let filtered = aggregate(all_records, config.max_latency_ms);
    info!(
        count = filtered.len(),
        cutoff_ms = config.max_latency_ms,
        "unique records under the latency cutoff"
    );

    if filtered.is_empty() {
        info!("no records passed the filter, nothing to sync");
        return Ok(());
    }

    handoff::write_records(&config.output, &filtered)?;
    info!(path = %config.output.display(), lines = filtered.len(), "hand-off file written");

    if config.skip_dns {
        info!("skipping DNS update as requested");
        return Ok(());
    }

    let ips = handoff::read_ips(&config.output, config.include_unlabeled)?;
    info!(count = ips.len(), "IP addresses selected for DNS update");

    let mut builder = CloudflareClient::builder(&config.api_token, &config.email);
    if let Some(base) = &config.api_base {
        builder = builder.base_url(base);
    }
    let dns = builder.build();

    let reconciler = Reconciler::new(&dns, &config.zone_id, &config.domain);
    let summary = reconciler.run(&ips).await;

    info!(
        deleted = summary.deleted,
        delete_failures = summary.delete_failures,
        created = summary.created,
        create_failures = summary.create_failures,
        skipped_invalid = summary.skipped_invalid,
        "DNS reconciliation finished"
    );
    info!("all done");

    Ok(())
}
