//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod registry_provider;
pub mod registry_source;

pub use registry_provider::RegistryProvider;
pub use registry_source::RegistrySource;
