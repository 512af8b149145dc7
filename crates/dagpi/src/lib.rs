//! Async client for the Dagpi image manipulation and data API.
//!
//! Every route is a GET carrying the access token in the `Authorization`
//! header. Data routes decode to a JSON map, image routes return the raw
//! body bytes. Errors are surfaced as-is; nothing is retried or cached.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod pride;

// Re-export commonly used types
pub use bytes::Bytes;
pub use client::Client;
pub use config::{ClientConfig, FileFormat, TimeoutConfig, DEFAULT_BASE_URL};
pub use endpoints::{Endpoint, EndpointKind};
pub use error::{DagpiError, DagpiResult};
pub use http::{HttpExecutor, JsonMap};
pub use pride::PrideFlag;
