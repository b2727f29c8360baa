//! HTTP Registry Source
//!
//! Fetches the latest networks registry document over HTTP.

use std::time::Duration;

use async_trait::async_trait;

use super::document;
use crate::domain::gateways::RegistrySource;
use crate::domain::models::network::Network;
use crate::shared::errors::SourceError;

/// Location of the latest published networks registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.thegraph.com/TheGraphNetworksRegistry.json";

/// Remote registry source backed by `reqwest`
pub struct HttpRegistrySource {
    client: reqwest::Client,
    url: String,
}

impl HttpRegistrySource {
    /// Create a source fetching `url` with the given request timeout
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Transport` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RegistrySource for HttpRegistrySource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch(&self) -> Result<Vec<Network>, SourceError> {
        tracing::debug!(url = %self.url, "Fetching networks registry");

        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        document::decode(&body)
    }
}
