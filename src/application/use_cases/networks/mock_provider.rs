//! Registry provider doubles shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::gateways::RegistryProvider;
use crate::domain::models::network::Network;
use crate::domain::models::registry::{NetworkRegistry, SnapshotOrigin};
use crate::shared::errors::{RegistryError, SourceError};

pub struct MockRegistryProvider {
    result: Result<Arc<NetworkRegistry>, RegistryError>,
}

impl MockRegistryProvider {
    pub fn with_networks(networks: Vec<Network>) -> Self {
        Self {
            result: Ok(Arc::new(NetworkRegistry::from_networks(SnapshotOrigin::Remote, networks))),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            result: Err(RegistryError::NoBaseline {
                remote: SourceError::Transport("connection refused".to_string()),
                embedded: SourceError::Decode("truncated".to_string()),
            }),
        }
    }
}

#[async_trait]
impl RegistryProvider for MockRegistryProvider {
    async fn current(&self) -> Result<Arc<NetworkRegistry>, RegistryError> {
        self.result.clone()
    }
}
