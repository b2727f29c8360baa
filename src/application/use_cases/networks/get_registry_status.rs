//! Get Registry Status Use Case
//!
//! Reports where the current snapshot came from and how large it is.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::gateways::RegistryProvider;
use crate::domain::models::registry::SnapshotOrigin;
use crate::shared::errors::UseCaseError;

/// Summary of the snapshot currently served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStatus {
    pub origin: SnapshotOrigin,
    pub loaded_at: DateTime<Utc>,
    pub network_count: usize,
}

/// Use case for describing the current registry snapshot
pub struct GetRegistryStatusUseCase {
    registry_provider: Arc<dyn RegistryProvider>,
}

impl GetRegistryStatusUseCase {
    /// Create a new GetRegistryStatusUseCase
    #[must_use]
    pub fn new(registry_provider: Arc<dyn RegistryProvider>) -> Self {
        Self { registry_provider }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Registry` if no registry baseline is available.
    pub async fn execute(&self) -> Result<RegistryStatus, UseCaseError> {
        let registry = self.registry_provider.current().await?;
        Ok(RegistryStatus {
            origin: registry.origin(),
            loaded_at: registry.loaded_at(),
            network_count: registry.len(),
        })
    }
}
