//! Shared latency-cell parser.
//!
//! Source tables render latency in slightly different shapes: `23ms`,
//! `23.5 ms`, `23毫秒`, or a bare number. The numeric prefix is what matters;
//! the unit token is recognized but never validated.

use regex::Regex;
use std::sync::OnceLock;

fn latency_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:ms|毫秒)?").expect("valid latency regex"))
}

/// Extract the numeric latency text from a free-text table cell.
///
/// Returns the captured digits exactly as they appear (so `"23ms"` yields
/// `"23"`, not `"23.0"`), or `None` when the cell has no numeric prefix.
/// The returned text always parses as `f64`.
#[must_use]
pub fn latency_text(cell: &str) -> Option<&str> {
    latency_re()
        .captures(cell)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
