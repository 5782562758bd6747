use thiserror::Error;

/// Result type alias for edgeip operations
pub type Result<T> = std::result::Result<T, EdgeIpError>;

/// Errors that can occur across the scrape/filter/reconcile pipeline
#[derive(Error, Debug)]
pub enum EdgeIpError {
    /// A page fetch failed at the transport level
    #[error("fetch failed for {url}: {reason}")]
    Fetch {
        /// URL of the source page
        url: String,
        /// Underlying transport error text
        reason: String,
    },

    /// A page fetch returned a non-success status
    #[error("fetch returned HTTP {code} for {url}")]
    Status {
        /// URL of the source page
        url: String,
        /// HTTP status code
        code: u16,
    },

    /// The DNS API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the provider, or "unknown error"
        message: String,
    },

    /// A DNS API request failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// An IP address failed strict dotted-quad validation
    #[error("invalid IP address: {0}")]
    InvalidIp(String),

    /// A serialized record did not carry a parseable latency suffix
    #[error("malformed serialized record: {0}")]
    MalformedRecord(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Hand-off file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl EdgeIpError {
    /// Returns true if the error came from talking to the network
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Fetch { .. } | Self::Status { .. } | Self::Http(_) | Self::Api { .. }
        )
    }

    /// Returns the HTTP status code if this error carries one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } | Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
