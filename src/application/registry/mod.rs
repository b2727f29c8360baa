//! Registry Acquisition
//!
//! Loading, caching and refreshing of the networks registry snapshot.

pub mod backoff;
pub mod cache;
pub mod loader;
mod refresh;
mod repair;

#[cfg(test)]
pub(crate) mod testing;

pub use backoff::BackoffPolicy;
pub use cache::RegistryCache;
pub use loader::RegistryLoader;
