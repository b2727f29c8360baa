//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Registry sources (remote HTTP, embedded snapshot)
//! - Configuration

pub mod config;
pub mod registry_source;

pub use config::AppConfig;
pub use registry_source::{EmbeddedRegistrySource, HttpRegistrySource};
