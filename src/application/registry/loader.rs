//! Registry Loader
//!
//! Turns a registry source into a registry snapshot, merging the local
//! overrides into every load.

use crate::domain::gateways::RegistrySource;
use crate::domain::models::network::Network;
use crate::domain::models::overrides::network_overrides;
use crate::domain::models::registry::{NetworkRegistry, SnapshotOrigin};
use crate::shared::errors::{DomainError, SourceError};

/// Builds registry snapshots from a source plus override records
#[derive(Debug, Clone, Default)]
pub struct RegistryLoader {
    overrides: Vec<Network>,
}

impl RegistryLoader {
    /// Create a loader applying `overrides` in the given order
    #[must_use]
    pub fn new(overrides: Vec<Network>) -> Self {
        Self { overrides }
    }

    /// Create a loader applying the built-in overrides
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if a built-in override is malformed.
    pub fn with_default_overrides() -> Result<Self, DomainError> {
        Ok(Self::new(network_overrides()?))
    }

    #[must_use]
    pub fn overrides(&self) -> &[Network] {
        &self.overrides
    }

    /// Fetch from `source` and build a fresh snapshot
    ///
    /// Upstream records always win over overrides sharing their id.
    ///
    /// # Errors
    ///
    /// Returns the source's `SourceError` when the fetch or decode fails.
    pub async fn load(
        &self,
        source: &dyn RegistrySource,
        origin: SnapshotOrigin,
    ) -> Result<NetworkRegistry, SourceError> {
        tracing::debug!(source = source.name(), "Loading networks registry");

        let networks = source.fetch().await?;
        let mut registry = NetworkRegistry::from_networks(origin, networks);
        let upstream_count = registry.len();

        for network in &self.overrides {
            if !registry.insert_network(network.clone(), false) {
                tracing::debug!(network_id = %network.id(), "Override shadowed by upstream network");
            }
        }

        tracing::debug!(
            source = source.name(),
            origin = origin.as_str(),
            upstream = upstream_count,
            total = registry.len(),
            "Networks registry loaded"
        );
        Ok(registry)
    }
}
