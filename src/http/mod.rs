//! HTTP client module
//!
//! Provides the client used for every page request of a run.
//!
//! # Features
//!
//! - **Timeouts**: one bounded timeout per request
//! - **Compression**: gzip requested and decoded transparently
//! - **Error classification**: timeout, status, transport, decompression

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
