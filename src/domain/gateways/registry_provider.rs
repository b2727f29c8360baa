//! Registry Provider Gateway
//!
//! Abstract access to the current registry snapshot.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::models::registry::NetworkRegistry;
use crate::shared::errors::RegistryError;

/// Provider of the current registry snapshot
///
/// Callers needing a consistent view across several lookups should hold on to
/// one returned snapshot instead of calling `current` again per lookup.
#[async_trait]
pub trait RegistryProvider: Send + Sync {
    /// The snapshot currently in effect, loading it on first use
    async fn current(&self) -> Result<Arc<NetworkRegistry>, RegistryError>;
}
