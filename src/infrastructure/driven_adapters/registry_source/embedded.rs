//! Embedded Registry Source
//!
//! Decodes the registry snapshot bundled into the binary. Used as the
//! fallback when the remote registry cannot be reached on first load.

use std::borrow::Cow;

use async_trait::async_trait;

use super::document;
use crate::domain::gateways::RegistrySource;
use crate::domain::models::network::Network;
use crate::shared::errors::SourceError;

/// Registry snapshot bundled at build time
pub static EMBEDDED_REGISTRY_JSON: &[u8] = include_bytes!("../../../../data/fallback_networks_registry.json");

/// Source decoding a static registry blob
pub struct EmbeddedRegistrySource {
    blob: Cow<'static, [u8]>,
}

impl Default for EmbeddedRegistrySource {
    fn default() -> Self {
        Self {
            blob: Cow::Borrowed(EMBEDDED_REGISTRY_JSON),
        }
    }
}

impl EmbeddedRegistrySource {
    /// Source decoding the given blob instead of the bundled one
    #[must_use]
    pub fn from_bytes(blob: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Cow::Owned(blob.into()),
        }
    }
}

#[async_trait]
impl RegistrySource for EmbeddedRegistrySource {
    fn name(&self) -> &str {
        "embedded"
    }

    async fn fetch(&self) -> Result<Vec<Network>, SourceError> {
        document::decode(&self.blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::network::BytesEncoding;
    use crate::domain::models::registry::{NetworkRegistry, SnapshotOrigin};
    use crate::domain::models::service::ServiceKind;

    async fn bundled() -> NetworkRegistry {
        let networks = EmbeddedRegistrySource::default().fetch().await.unwrap();
        NetworkRegistry::from_networks(SnapshotOrigin::Embedded, networks)
    }

    #[tokio::test]
    async fn should_decode_bundled_snapshot() {
        let registry = bundled().await;
        assert!(!registry.is_empty());
        for key in ["mainnet", "eth", "arbitrum", "polygon", "bnb", "optimism", "base", "sepolia"] {
            assert!(registry.find(key).is_some(), "{key} should be bundled");
        }
    }

    #[tokio::test]
    async fn should_carry_substreams_endpoints_and_encodings() {
        let registry = bundled().await;
        let substreams = registry.filter_by_service(ServiceKind::Substreams);
        assert!(substreams.contains("mainnet"));
        assert!(!substreams.contains("cronos"));

        let solana = registry.find("solana-mainnet-beta").unwrap();
        assert_eq!(solana.bytes_encoding(), BytesEncoding::Base58);
    }

    #[tokio::test]
    async fn should_fail_on_garbage_blob() {
        let result = EmbeddedRegistrySource::from_bytes(b"not json".to_vec()).fetch().await;
        assert!(matches!(result, Err(SourceError::Decode(_))));
    }
}
