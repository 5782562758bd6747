//! Single-attempt page fetching.

use edgeip_core::{EdgeIpError, Result};
use std::time::Duration;
use tracing::debug;

/// Browser-like User-Agent; some of the source pages refuse obvious bots
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-page fetch timeout
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the HTTP client used for all page fetches
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| EdgeIpError::Config(format!("failed to build HTTP client: {e}")))
}

/// Fetch one source page and return its HTML body.
///
/// One GET, no retries. Transport failures and non-2xx statuses both come
/// back as errors; the caller logs them and takes zero records from the
/// site.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching source page");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| EdgeIpError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(EdgeIpError::Status {
            url: url.to_string(),
            code: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| EdgeIpError::Fetch {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
