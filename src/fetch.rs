//! Fetching documents by URL.

use crate::error::TransportError;
use async_trait::async_trait;
use url::Url;

/// Host networking: fetches the body at a URL.
///
/// Implementations should return `TransportError::Status` for any non-success response.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError>;
}

/// A [`Fetch`] implementation backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> HttpFetcher {
        HttpFetcher::default()
    }

    /// Uses a preconfigured client, e.g. one with a timeout or custom headers.
    pub fn with_client(client: reqwest::Client) -> HttpFetcher {
        HttpFetcher { client }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
