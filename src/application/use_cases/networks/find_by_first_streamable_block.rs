//! Find By First Streamable Block Use Case
//!
//! Identifies a chain from the height and hash of its first streamable block.

use std::sync::Arc;

use crate::domain::gateways::RegistryProvider;
use crate::domain::models::network::Network;
use crate::shared::errors::UseCaseError;

/// Use case for identifying a network by its first streamable block
pub struct FindByFirstStreamableBlockUseCase {
    registry_provider: Arc<dyn RegistryProvider>,
}

impl FindByFirstStreamableBlockUseCase {
    /// Create a new FindByFirstStreamableBlockUseCase
    #[must_use]
    pub fn new(registry_provider: Arc<dyn RegistryProvider>) -> Self {
        Self { registry_provider }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Registry` if no registry baseline is available.
    pub async fn execute(&self, height: u64, hash: &str) -> Result<Option<Arc<Network>>, UseCaseError> {
        tracing::debug!(height, hash, "Finding network by first streamable block");

        let registry = self.registry_provider.current().await?;
        Ok(registry.find_by_first_streamable_block(height, hash).cloned())
    }
}
