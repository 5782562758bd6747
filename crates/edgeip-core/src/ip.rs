//! Strict IPv4 validation for addresses headed to the DNS API.

use std::net::Ipv4Addr;
use std::str::FromStr;

/// Validate strict dotted-quad IPv4 syntax.
///
/// Four octets, each 0-255, nothing before or after the address. Anything
/// scraped from a table cell that is not exactly an IPv4 address fails here
/// and never reaches the API.
#[must_use]
pub fn is_valid_ipv4(s: &str) -> bool {
    Ipv4Addr::from_str(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dotted_quad() {
        assert!(is_valid_ipv4("1.2.3.4"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(is_valid_ipv4("0.0.0.0"));
    }

    #[test]
    fn rejects_out_of_range_octet() {
        assert!(!is_valid_ipv4("999.1.1.1"));
        assert!(!is_valid_ipv4("256.0.0.1"));
    }

    #[test]
    fn rejects_short_address() {
        assert!(!is_valid_ipv4("1.2.3"));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(!is_valid_ipv4("abc"));
        assert!(!is_valid_ipv4(""));
    }

    #[test]
    fn rejects_trailing_junk() {
        assert!(!is_valid_ipv4("1.2.3.4x"));
        assert!(!is_valid_ipv4("1.2.3.4 "));
    }
}
