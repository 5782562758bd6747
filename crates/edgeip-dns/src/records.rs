//! DNS record endpoints.

use crate::CloudflareClient;
use edgeip_core::{
    CreateRecordResponse, DnsRecord, ListRecordsResponse, NewARecord, Result,
};

/// DNS record endpoints for one zone
pub struct RecordsApi<'a> {
    client: &'a CloudflareClient,
    zone_id: &'a str,
}

impl<'a> RecordsApi<'a> {
    pub(crate) fn new(client: &'a CloudflareClient, zone_id: &'a str) -> Self {
        Self { client, zone_id }
    }

    /// List all records whose name equals `name`
    pub async fn list(&self, name: &str) -> Result<Vec<DnsRecord>> {
        let response: ListRecordsResponse = self
            .client
            .get(
                &format!("/zones/{}/dns_records", self.zone_id),
                &[("name", name)],
            )
            .await?;

        Ok(response.result)
    }

    /// Delete one record by id
    pub async fn delete(&self, record_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/zones/{}/dns_records/{}", self.zone_id, record_id))
            .await
    }

    /// Create an A record pointing `name` at `ip`, with the fixed TTL and
    /// proxying disabled
    pub async fn create_a(&self, name: &str, ip: &str) -> Result<Option<DnsRecord>> {
        let body = NewARecord::new(name, ip);
        let response: CreateRecordResponse = self
            .client
            .post(&format!("/zones/{}/dns_records", self.zone_id), &body)
            .await?;

        Ok(response.result)
    }
}
