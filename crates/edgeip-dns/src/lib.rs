//! Cloudflare DNS API client and the clear-then-recreate reconciler.

mod client;
mod reconcile;
mod records;

pub use client::{CloudflareClient, CloudflareClientBuilder};
pub use reconcile::{Reconciler, ReconcileSummary};
pub use records::RecordsApi;
pub use edgeip_core::{EdgeIpError, Result};
