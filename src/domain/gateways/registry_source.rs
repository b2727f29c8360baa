//! Registry Source Gateway
//!
//! Abstract trait for anything able to produce the list of network records:
//! the live remote registry or the snapshot bundled with the binary.

use async_trait::async_trait;

use crate::domain::models::network::Network;
use crate::shared::errors::SourceError;

/// Source of network records
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Fetch every network record the source knows about
    async fn fetch(&self) -> Result<Vec<Network>, SourceError>;
}
