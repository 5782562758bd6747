//! Page fetching and HTML table extraction for the edgeip pipeline.
//!
//! One [`fetch_page`] call per configured source URL, then
//! [`extract_records`] reads the site's result table according to its
//! [`TableRule`](edgeip_core::TableRule).

mod extract;
mod fetch;

pub use extract::extract_records;
pub use fetch::{build_client, fetch_page, FETCH_TIMEOUT, USER_AGENT};
