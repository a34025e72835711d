//! Page fetcher implementations

use super::types::ResultPage;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use async_trait::async_trait;
use url::Url;

/// Fetches and decodes one page of results
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Perform one request for `url` and decode the response.
    ///
    /// Called once per page; implementations must not retry.
    async fn fetch_page(&self, url: &Url) -> Result<ResultPage>;
}

/// Fetches pages over HTTP
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: HttpClient,
}

impl HttpPageFetcher {
    /// Create a fetcher using the given client
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &Url) -> Result<ResultPage> {
        let body = self.client.get_body(url).await?;
        decode_page(&body)
    }
}

/// Decode a (decompressed) response body into a page
pub fn decode_page(body: &[u8]) -> Result<ResultPage> {
    serde_json::from_slice(body).map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))
}
