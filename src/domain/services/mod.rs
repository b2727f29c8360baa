//! Domain Services
//!
//! Stateless domain logic operating on network records.

pub mod endpoint_selector;

pub use endpoint_selector::{EndpointSelector, DEFAULT_PREFERRED_PROVIDER_MARKERS};
