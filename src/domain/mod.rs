//! Domain Layer
//!
//! Contains the network records, the registry snapshot with its lookups, and
//! gateway traits (ports). This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;
pub mod services;

pub use gateways::{RegistryProvider, RegistrySource};
pub use models::{Network, NetworkId, NetworkRegistry, ServiceKind, SnapshotOrigin};
pub use services::EndpointSelector;
