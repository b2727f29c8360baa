//! Application Layer
//!
//! Contains the registry cache with its background tasks, and the use cases
//! answering queries against it. Use cases depend on domain gateways
//! (abstractions), not concrete implementations.

pub mod registry;
pub mod use_cases;
