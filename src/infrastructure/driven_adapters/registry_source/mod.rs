//! Registry Sources
//!
//! Adapters producing network records for the registry loader.

pub mod document;
pub mod embedded;
pub mod http;

pub use embedded::EmbeddedRegistrySource;
pub use http::{HttpRegistrySource, DEFAULT_REGISTRY_URL};
