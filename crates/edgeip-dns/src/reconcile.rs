//! Clear-then-recreate reconciliation of the target hostname's A records.
//!
//! Two sequential phases with no rollback. Every per-record failure is
//! logged and swallowed; the run always proceeds to the end and the logs are
//! the failure record.

use crate::CloudflareClient;
use edgeip_core::is_valid_ipv4;
use tracing::{error, info, warn};

/// Counters describing what one reconciliation run actually did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Records deleted in the clear phase
    pub deleted: usize,
    /// Deletions that failed
    pub delete_failures: usize,
    /// Records created in the add phase
    pub created: usize,
    /// Creations that failed
    pub create_failures: usize,
    /// IPs rejected by validation before any API call
    pub skipped_invalid: usize,
}

/// Reconciles the record set for one hostname in one zone
pub struct Reconciler<'a> {
    client: &'a CloudflareClient,
    zone_id: &'a str,
    hostname: &'a str,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler for the given zone and hostname
    #[must_use]
    pub const fn new(client: &'a CloudflareClient, zone_id: &'a str, hostname: &'a str) -> Self {
        Self {
            client,
            zone_id,
            hostname,
        }
    }

    /// Clear phase: list every record matching the hostname and delete each
    /// by id. An empty listing is normal; a failed listing aborts only this
    /// phase.
    pub async fn clear(&self, summary: &mut ReconcileSummary) {
        info!(hostname = self.hostname, "clearing existing DNS records");

        let api = self.client.records(self.zone_id);
        let records = match api.list(self.hostname).await {
            Ok(records) => records,
            Err(e) => {
                error!(error = %e, "failed to list existing records, skipping clear phase");
                return;
            }
        };

        if records.is_empty() {
            info!("no existing records to delete");
            return;
        }

        for record in records {
            let name = record.name.as_deref().unwrap_or(self.hostname);
            match api.delete(&record.id).await {
                Ok(()) => {
                    info!(name, id = %record.id, "deleted DNS record");
                    summary.deleted += 1;
                }
                Err(e) => {
                    error!(name, id = %record.id, error = %e, "failed to delete DNS record");
                    summary.delete_failures += 1;
                }
            }
        }
    }

    /// Add phase: create one A record per IP. Invalid IPs are skipped before
    /// any API call; provider errors are logged per IP and do not stop the
    /// rest.
    pub async fn add(&self, ips: &[String], summary: &mut ReconcileSummary) {
        let api = self.client.records(self.zone_id);

        for ip in ips {
            if !is_valid_ipv4(ip) {
                warn!(ip, "invalid IP address, skipping");
                summary.skipped_invalid += 1;
                continue;
            }

            info!(ip, "adding DNS record");
            match api.create_a(self.hostname, ip).await {
                Ok(_) => {
                    info!(ip, "added DNS record");
                    summary.created += 1;
                }
                Err(e) => {
                    error!(ip, error = %e, "failed to add DNS record");
                    summary.create_failures += 1;
                }
            }
        }
    }

    /// Run both phases in order and return the counters
    pub async fn run(&self, ips: &[String]) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();
        self.clear(&mut summary).await;
        self.add(ips, &mut summary).await;
        summary
    }
}
