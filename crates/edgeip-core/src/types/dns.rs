use serde::{Deserialize, Serialize};

/// TTL applied to every record the job creates
pub const RECORD_TTL: u32 = 60;

/// An existing DNS record, as returned by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Provider-assigned record id
    pub id: String,

    /// Record type ("A" for everything this job touches)
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,

    /// Record name (the target hostname)
    #[serde(default)]
    pub name: Option<String>,

    /// Record content (the IP address for A records)
    #[serde(default)]
    pub content: Option<String>,

    /// Time to live in seconds
    #[serde(default)]
    pub ttl: Option<u32>,

    /// Whether the record is proxied through the provider's edge
    #[serde(default)]
    pub proxied: Option<bool>,
}

/// Body for creating a new A record
#[derive(Debug, Clone, Serialize)]
pub struct NewARecord {
    /// Always "A"
    #[serde(rename = "type")]
    pub record_type: &'static str,

    /// Target hostname
    pub name: String,

    /// IP address
    pub content: String,

    /// Time to live in seconds
    pub ttl: u32,

    /// Never proxied; the whole point is direct connectivity
    pub proxied: bool,
}

impl NewARecord {
    /// Build the fixed-shape creation body for one IP
    #[must_use]
    pub fn new(name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            record_type: "A",
            name: name.into(),
            content: ip.into(),
            ttl: RECORD_TTL,
            proxied: false,
        }
    }
}

/// Envelope of a record-listing response
#[derive(Debug, Clone, Deserialize)]
pub struct ListRecordsResponse {
    /// The matching records
    #[serde(default)]
    pub result: Vec<DnsRecord>,
}

/// Envelope of a record-creation response
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordResponse {
    /// The created record, when the provider echoes it back
    #[serde(default)]
    pub result: Option<DnsRecord>,
}

/// Error envelope returned by the provider on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Provider error entries
    #[serde(default)]
    pub errors: Vec<ApiErrorEntry>,
}

/// One provider error entry
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorEntry {
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// First provider-supplied message, if any
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().and_then(|e| e.message.as_deref())
    }
}
