//! Cloudflare v4 API client.

use crate::records::RecordsApi;
use edgeip_core::{ApiErrorBody, EdgeIpError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// The Cloudflare v4 API base URL
const DEFAULT_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Default request timeout for API calls
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloudflare DNS API client
#[derive(Clone)]
pub struct CloudflareClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_token: String,
    email: String,
    base_url: String,
}

impl CloudflareClient {
    /// Create a client with default settings
    #[must_use]
    pub fn new(api_token: impl Into<String>, email: impl Into<String>) -> Self {
        CloudflareClientBuilder::new(api_token, email).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(
        api_token: impl Into<String>,
        email: impl Into<String>,
    ) -> CloudflareClientBuilder {
        CloudflareClientBuilder::new(api_token, email)
    }

    /// Access DNS record endpoints for a zone
    #[must_use]
    pub fn records<'a>(&'a self, zone_id: &'a str) -> RecordsApi<'a> {
        RecordsApi::new(self, zone_id)
    }

    /// Perform a GET request with query parameters
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.inner.base_url, path);
        debug!(url = %url, "GET request");

        let response = self
            .request(self.inner.http.get(&url).query(params))
            .await?;

        self.handle_response(response).await
    }

    /// Perform a POST request with a JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.inner.base_url, path);
        debug!(url = %url, "POST request");

        let response = self.request(self.inner.http.post(&url).json(body)).await?;

        self.handle_response(response).await
    }

    /// Perform a DELETE request
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = format!("{}{}", self.inner.base_url, path);
        debug!(url = %url, "DELETE request");

        let response = self.request(self.inner.http.delete(&url)).await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from(status.as_u16(), response).await)
        }
    }

    async fn request(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        builder
            .bearer_auth(&self.inner.api_token)
            .header("X-Auth-Email", &self.inner.email)
            .send()
            .await
            .map_err(|e| EdgeIpError::Http(e.to_string()))
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| EdgeIpError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(EdgeIpError::Json)
        } else {
            Err(Self::error_from(status.as_u16(), response).await)
        }
    }

    /// Build an [`EdgeIpError::Api`] from a non-2xx response, preferring the
    /// provider's own error message when the body carries one
    async fn error_from(code: u16, response: reqwest::Response) -> EdgeIpError {
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.first_message().map(String::from))
            .unwrap_or_else(|| "unknown error".to_string());

        EdgeIpError::Api { code, message }
    }
}

/// Builder for configuring a [`CloudflareClient`]
pub struct CloudflareClientBuilder {
    api_token: String,
    email: String,
    base_url: String,
    timeout: Duration,
}

impl CloudflareClientBuilder {
    /// Create a new builder with the given credentials
    #[must_use]
    pub fn new(api_token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            email: email.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    #[must_use]
    pub fn build(self) -> CloudflareClient {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        CloudflareClient {
            inner: Arc::new(ClientInner {
                http,
                api_token: self.api_token,
                email: self.email,
                base_url: self.base_url,
            }),
        }
    }
}
