//! Network Use Cases
//!
//! Read-only queries resolving network identifiers against the registry.

mod find_by_endpoint;
mod find_by_first_streamable_block;
mod find_network;
mod get_preferred_endpoint;
mod get_registry_status;
mod list_networks_by_service;

#[cfg(test)]
mod mock_provider;

pub use find_by_endpoint::FindByEndpointUseCase;
pub use find_by_first_streamable_block::FindByFirstStreamableBlockUseCase;
pub use find_network::FindNetworkUseCase;
pub use get_preferred_endpoint::{GetPreferredEndpointUseCase, PreferredEndpoint};
pub use get_registry_status::{GetRegistryStatusUseCase, RegistryStatus};
pub use list_networks_by_service::ListNetworksByServiceUseCase;
