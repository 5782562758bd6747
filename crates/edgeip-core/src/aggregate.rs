//! Merging, deduplication and threshold filtering of serialized records.

use crate::error::{EdgeIpError, Result};
use std::collections::HashSet;
use tracing::warn;

/// Default latency cutoff in milliseconds; records at or above it are dropped
pub const DEFAULT_MAX_LATENCY_MS: f64 = 100.0;

/// Parse the latency suffix out of a serialized record.
///
/// The serialized forms are `<ip>#<label>-<latency>ms` and
/// `<ip>-<latency>ms`; either way the latency is whatever follows the last
/// `-`, with the `ms` suffix stripped.
pub fn serialized_latency_ms(record: &str) -> Result<f64> {
    let suffix = record
        .rsplit('-')
        .next()
        .ok_or_else(|| EdgeIpError::MalformedRecord(record.to_string()))?;

    suffix
        .trim_end_matches("ms")
        .parse::<f64>()
        .map_err(|_| EdgeIpError::MalformedRecord(record.to_string()))
}

/// Deduplicate all sites' serialized records and keep those under the cutoff.
///
/// Deduplication is by exact string equality; the resulting order is
/// unspecified. If any record fails to parse, the whole filter step is
/// abandoned and the full unique set is returned instead of a partial one —
/// a malformed record means the serialized format itself is suspect, so no
/// silent partial answer.
#[must_use]
pub fn aggregate(records: Vec<String>, max_latency_ms: f64) -> Vec<String> {
    let unique: Vec<String> = records
        .into_iter()
        .collect::<HashSet<String>>()
        .into_iter()
        .collect();

    let parsed: Result<Vec<(String, f64)>> = unique
        .iter()
        .map(|r| serialized_latency_ms(r).map(|ms| (r.clone(), ms)))
        .collect();

    match parsed {
        Ok(pairs) => pairs
            .into_iter()
            .filter(|(_, ms)| *ms < max_latency_ms)
            .map(|(r, _)| r)
            .collect(),
        Err(e) => {
            warn!(error = %e, "filter step failed, keeping the full unique set");
            unique
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latency_suffix_labeled_record() {
        let ms = serialized_latency_ms("1.2.3.4#CM-42.5ms").unwrap();
        assert!((ms - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn latency_suffix_unlabeled_record() {
        let ms = serialized_latency_ms("1.2.3.4-87ms").unwrap();
        assert!((ms - 87.0).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_suffix_is_an_error() {
        assert!(serialized_latency_ms("1.2.3.4#CM-fastms").is_err());
    }

    #[test]
    fn duplicates_collapse_to_one() {
        let out = aggregate(
            vec!["1.2.3.4#CM-50ms".into(), "1.2.3.4#CM-50ms".into()],
            DEFAULT_MAX_LATENCY_MS,
        );
        assert_eq!(out, vec!["1.2.3.4#CM-50ms".to_string()]);
    }

    #[test]
    fn same_ip_different_label_stays_distinct() {
        let out = aggregate(
            vec!["1.2.3.4#CM-50ms".into(), "1.2.3.4#CU-50ms".into()],
            DEFAULT_MAX_LATENCY_MS,
        );
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn threshold_is_strict() {
        let records = vec![
            "1.1.1.1#A-50ms".to_string(),
            "2.2.2.2#B-99.9ms".to_string(),
            "3.3.3.3#C-100ms".to_string(),
            "4.4.4.4#D-150ms".to_string(),
        ];
        let mut out = aggregate(records, DEFAULT_MAX_LATENCY_MS);
        out.sort();
        assert_eq!(out, vec!["1.1.1.1#A-50ms", "2.2.2.2#B-99.9ms"]);
    }

    #[test]
    fn one_malformed_record_disables_the_filter() {
        let records = vec![
            "1.1.1.1#A-50ms".to_string(),
            "4.4.4.4#D-150ms".to_string(),
            "5.5.5.5#E-brokenms".to_string(),
        ];
        let out = aggregate(records, DEFAULT_MAX_LATENCY_MS);
        // fallback keeps everything, including the over-threshold record
        assert_eq!(out.len(), 3);
    }
}
