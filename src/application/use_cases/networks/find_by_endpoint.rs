//! Find By Endpoint Use Case
//!
//! Identifies the network served by a given service endpoint.

use std::sync::Arc;

use crate::domain::gateways::RegistryProvider;
use crate::domain::models::network::Network;
use crate::domain::models::service::ServiceKind;
use crate::shared::errors::UseCaseError;

/// Use case for finding a network from one of its endpoints
pub struct FindByEndpointUseCase {
    registry_provider: Arc<dyn RegistryProvider>,
}

impl FindByEndpointUseCase {
    /// Create a new FindByEndpointUseCase
    #[must_use]
    pub fn new(registry_provider: Arc<dyn RegistryProvider>) -> Self {
        Self { registry_provider }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Registry` if no registry baseline is available.
    pub async fn execute(&self, service: ServiceKind, endpoint: &str) -> Result<Option<Arc<Network>>, UseCaseError> {
        tracing::debug!(service = %service, endpoint, "Finding network by endpoint");

        let registry = self.registry_provider.current().await?;
        Ok(registry.find_by_endpoint(service, endpoint).cloned())
    }
}
