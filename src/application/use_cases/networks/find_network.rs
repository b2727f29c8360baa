//! Find Network Use Case
//!
//! Resolves a network by id, alias, full name or short name.

use std::sync::Arc;

use crate::domain::gateways::RegistryProvider;
use crate::domain::models::network::Network;
use crate::shared::errors::UseCaseError;

/// Use case for resolving a network key
pub struct FindNetworkUseCase {
    registry_provider: Arc<dyn RegistryProvider>,
}

impl FindNetworkUseCase {
    /// Create a new FindNetworkUseCase
    #[must_use]
    pub fn new(registry_provider: Arc<dyn RegistryProvider>) -> Self {
        Self { registry_provider }
    }

    /// Execute the use case
    ///
    /// Returns `Ok(None)` when no network answers to `key`.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Registry` if no registry baseline is available.
    pub async fn execute(&self, key: &str) -> Result<Option<Arc<Network>>, UseCaseError> {
        tracing::debug!(key, "Finding network");

        let registry = self.registry_provider.current().await?;
        let network = registry.find(key).cloned();

        match &network {
            Some(network) => tracing::debug!(key, network_id = %network.id(), "Network found"),
            None => tracing::debug!(key, "Network not found"),
        }
        Ok(network)
    }
}
