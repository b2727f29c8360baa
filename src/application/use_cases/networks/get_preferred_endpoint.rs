//! Get Preferred Endpoint Use Case
//!
//! Resolves a network key and picks its preferred endpoint for a service.

use std::sync::Arc;

use crate::domain::gateways::RegistryProvider;
use crate::domain::models::network::{Network, NetworkId};
use crate::domain::models::service::ServiceKind;
use crate::domain::services::EndpointSelector;
use crate::shared::errors::UseCaseError;

/// Outcome of an endpoint selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferredEndpoint {
    /// The chosen endpoint
    Found {
        network_id: NetworkId,
        service: ServiceKind,
        endpoint: String,
    },
    /// The network exists but advertises no endpoint for the service
    NoEndpoint { network_id: NetworkId, service: ServiceKind },
    /// No network answers to the key
    UnknownNetwork,
}

impl PreferredEndpoint {
    /// The endpoint, if one was found
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Found { endpoint, .. } => Some(endpoint.as_str()),
            Self::NoEndpoint { .. } | Self::UnknownNetwork => None,
        }
    }
}

/// Use case for selecting the preferred endpoint of a network
pub struct GetPreferredEndpointUseCase {
    registry_provider: Arc<dyn RegistryProvider>,
    selector: EndpointSelector,
}

impl GetPreferredEndpointUseCase {
    /// Create a new GetPreferredEndpointUseCase
    #[must_use]
    pub fn new(registry_provider: Arc<dyn RegistryProvider>, selector: EndpointSelector) -> Self {
        Self {
            registry_provider,
            selector,
        }
    }

    /// Execute the use case for a network key
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Registry` if no registry baseline is available.
    pub async fn execute(&self, key: &str, service: ServiceKind) -> Result<PreferredEndpoint, UseCaseError> {
        let registry = self.registry_provider.current().await?;

        let Some(network) = registry.find(key) else {
            tracing::debug!(key, service = %service, "No network for preferred endpoint lookup");
            return Ok(PreferredEndpoint::UnknownNetwork);
        };

        Ok(self.for_network(network, service))
    }

    /// Select the preferred endpoint of an already resolved network
    #[must_use]
    pub fn for_network(&self, network: &Network, service: ServiceKind) -> PreferredEndpoint {
        match self.selector.select(network, service) {
            Some(endpoint) => PreferredEndpoint::Found {
                network_id: network.id().clone(),
                service,
                endpoint: endpoint.to_string(),
            },
            None => PreferredEndpoint::NoEndpoint {
                network_id: network.id().clone(),
                service,
            },
        }
    }
}
