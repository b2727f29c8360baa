//! List Networks By Service Use Case
//!
//! Retrieves the networks advertising endpoints for a service.

use std::sync::Arc;

use crate::domain::gateways::RegistryProvider;
use crate::domain::models::registry::NetworkRegistry;
use crate::domain::models::service::ServiceKind;
use crate::shared::errors::UseCaseError;

/// Use case for listing networks, optionally restricted to one service
pub struct ListNetworksByServiceUseCase {
    registry_provider: Arc<dyn RegistryProvider>,
}

impl ListNetworksByServiceUseCase {
    /// Create a new ListNetworksByServiceUseCase
    #[must_use]
    pub fn new(registry_provider: Arc<dyn RegistryProvider>) -> Self {
        Self { registry_provider }
    }

    /// Execute the use case
    ///
    /// Without a service the whole current snapshot is returned.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Registry` if no registry baseline is available.
    pub async fn execute(&self, service: Option<ServiceKind>) -> Result<Arc<NetworkRegistry>, UseCaseError> {
        let registry = self.registry_provider.current().await?;

        let Some(service) = service else {
            tracing::debug!(count = registry.len(), "Listing all networks");
            return Ok(registry);
        };

        let filtered = registry.filter_by_service(service);
        tracing::debug!(service = %service, count = filtered.len(), "Listing networks by service");
        Ok(Arc::new(filtered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::networks::mock_provider::MockRegistryProvider;
    use crate::domain::models::network::fixtures::network;

    fn use_case() -> ListNetworksByServiceUseCase {
        ListNetworksByServiceUseCase::new(Arc::new(MockRegistryProvider::with_networks(vec![
            network("mainnet", &["eth"], &["a.example:443", "mainnet.eth.streamingfast.io:443"], &[]),
            network("cronos", &[], &[], &[]),
        ])))
    }

    #[tokio::test]
    async fn should_return_only_networks_with_substreams() {
        let networks = use_case().execute(Some(ServiceKind::Substreams)).await.unwrap();

        assert_eq!(networks.len(), 1);
        assert!(networks.contains("mainnet"));
        assert!(!networks.contains("cronos"));
    }

    #[tokio::test]
    async fn should_return_everything_without_service() {
        let networks = use_case().execute(None).await.unwrap();
        assert_eq!(networks.len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_registry_when_nothing_matches() {
        let networks = use_case().execute(Some(ServiceKind::Sps)).await.unwrap();
        assert!(networks.is_empty());
    }
}
