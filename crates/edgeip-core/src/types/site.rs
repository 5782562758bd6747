/// The fixed set of source pages the job scrapes, in fetch order
pub const SOURCE_URLS: [&str; 4] = [
    "https://cf.090227.xyz/",
    "https://stock.hostmonit.com/CloudFlareYes",
    "https://ip.164746.xyz/",
    "https://monitor.gacjie.cn/page/cloudflare/ipv4.html",
];

/// A known source site, resolved once per configured URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    /// cf.090227.xyz
    CfMonitor,
    /// stock.hostmonit.com (CloudFlareYes)
    HostMonit,
    /// ip.164746.xyz
    Ip164746,
    /// monitor.gacjie.cn
    Gacjie,
}

/// How to read one site's result table.
///
/// Column indices are zero-based positions among the row's `td` cells.
#[derive(Debug, Clone, Copy)]
pub struct TableRule {
    /// CSS selector picking the candidate rows
    pub row_selector: &'static str,

    /// Rows with fewer cells than this are skipped
    pub min_columns: usize,

    /// Cell holding the IP address
    pub ip_col: usize,

    /// Cell holding the latency text
    pub latency_col: usize,

    /// Cell holding the line/carrier name, for sites that publish one
    pub label_col: Option<usize>,
}

impl Site {
    /// Resolve a configured URL to its site by substring match.
    ///
    /// Returns `None` for URLs no rule covers; such sources contribute zero
    /// records.
    #[must_use]
    pub fn for_url(url: &str) -> Option<Self> {
        if url.contains("cf.090227.xyz") {
            Some(Self::CfMonitor)
        } else if url.contains("stock.hostmonit.com") {
            Some(Self::HostMonit)
        } else if url.contains("ip.164746.xyz") {
            Some(Self::Ip164746)
        } else if url.contains("monitor.gacjie.cn") {
            Some(Self::Gacjie)
        } else {
            None
        }
    }

    /// The table-reading rule for this site
    #[must_use]
    pub const fn rule(self) -> TableRule {
        match self {
            Self::CfMonitor => TableRule {
                row_selector: "tr",
                min_columns: 3,
                ip_col: 1,
                latency_col: 2,
                label_col: Some(0),
            },
            // hostmonit renders through element-ui; data rows carry an
            // el-table__row class (sometimes with striping suffixes)
            Self::HostMonit => TableRule {
                row_selector: "tr[class*='el-table__row']",
                min_columns: 3,
                ip_col: 1,
                latency_col: 2,
                label_col: Some(0),
            },
            Self::Ip164746 => TableRule {
                row_selector: "tr",
                min_columns: 5,
                ip_col: 0,
                latency_col: 4,
                label_col: None,
            },
            Self::Gacjie => TableRule {
                row_selector: "tr",
                min_columns: 5,
                ip_col: 1,
                latency_col: 4,
                label_col: Some(0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_source_url_resolves() {
        for url in SOURCE_URLS {
            assert!(Site::for_url(url).is_some(), "no site for {url}");
        }
    }

    #[test]
    fn unknown_url_resolves_to_none() {
        assert_eq!(Site::for_url("https://example.com/"), None);
    }

    #[test]
    fn resolution_is_by_substring() {
        assert_eq!(
            Site::for_url("http://mirror.test/cf.090227.xyz/cached"),
            Some(Site::CfMonitor)
        );
    }
}
