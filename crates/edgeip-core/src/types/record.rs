use std::fmt;

/// One scraped table row: an IP address with its observed latency and,
/// for sites that publish one, a line/carrier label.
///
/// Latency is kept as the captured numeric text rather than an `f64` so the
/// serialized form reproduces the source exactly (`23` stays `23`). The
/// extractor guarantees it parses as a float.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRecord {
    /// IP address as scraped (validated later, before any DNS call)
    pub ip: String,

    /// Line/carrier name, for sites whose tables carry one
    pub label: Option<String>,

    /// Latency in milliseconds, as captured from the cell
    pub latency: String,
}

impl ScoredRecord {
    /// Create a record from scraped cell texts
    #[must_use]
    pub fn new(ip: impl Into<String>, label: Option<String>, latency: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            label,
            latency: latency.into(),
        }
    }

    /// Canonical serialized form used for deduplication and the hand-off
    /// file: `<ip>#<label>-<latency>ms` when labeled, `<ip>-<latency>ms`
    /// otherwise.
    #[must_use]
    pub fn serialized(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScoredRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}#{}-{}ms", self.ip, label, self.latency),
            None => write!(f, "{}-{}ms", self.ip, self.latency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_serialization() {
        let r = ScoredRecord::new("104.16.1.1", Some("电信".to_string()), "42.5");
        assert_eq!(r.serialized(), "104.16.1.1#电信-42.5ms");
    }

    #[test]
    fn unlabeled_serialization() {
        let r = ScoredRecord::new("104.16.1.1", None, "87");
        assert_eq!(r.serialized(), "104.16.1.1-87ms");
    }

    #[test]
    fn integer_latency_is_not_reformatted() {
        let r = ScoredRecord::new("1.2.3.4", Some("CM".to_string()), "23");
        assert_eq!(r.serialized(), "1.2.3.4#CM-23ms");
    }
}
