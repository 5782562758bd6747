//! Core types and logic for the edgeip pipeline.
//!
//! This crate holds everything that needs no I/O:
//!
//! - **Types**: scored IP records, source site descriptors, DNS wire types
//! - **Latency**: the shared latency-cell parser
//! - **Aggregation**: deduplication and threshold filtering
//! - **Errors**: the [`EdgeIpError`] taxonomy shared across the workspace

mod aggregate;
mod error;
mod ip;
mod latency;
pub mod types;

pub use aggregate::{aggregate, serialized_latency_ms, DEFAULT_MAX_LATENCY_MS};
pub use error::{EdgeIpError, Result};
pub use ip::is_valid_ipv4;
pub use latency::latency_text;
pub use types::*;
