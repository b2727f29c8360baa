//! Endpoint Selector
//!
//! Picks the preferred endpoint a network advertises for a service.

use crate::domain::models::network::Network;
use crate::domain::models::service::ServiceKind;

/// Provider markers preferred when no other configuration is given
pub const DEFAULT_PREFERRED_PROVIDER_MARKERS: &[&str] = &["streamingfast.io"];

/// Chooses among a network's endpoints, favouring recognized provider domains
#[derive(Debug, Clone)]
pub struct EndpointSelector {
    preferred_markers: Vec<String>,
}

impl Default for EndpointSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PREFERRED_PROVIDER_MARKERS.iter().map(ToString::to_string))
    }
}

impl EndpointSelector {
    /// Create a selector; markers are tried in the given order
    #[must_use]
    pub fn new(preferred_markers: impl IntoIterator<Item = String>) -> Self {
        Self {
            preferred_markers: preferred_markers
                .into_iter()
                .filter(|marker| !marker.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn preferred_markers(&self) -> &[String] {
        &self.preferred_markers
    }

    /// The first endpoint containing a preferred marker, else the first endpoint
    ///
    /// Returns `None` when the network advertises no endpoint for `service`.
    #[must_use]
    pub fn select<'a>(&self, network: &'a Network, service: ServiceKind) -> Option<&'a str> {
        let endpoints = network.endpoints(service);

        self.preferred_markers
            .iter()
            .find_map(|marker| endpoints.iter().find(|endpoint| endpoint.contains(marker.as_str())))
            .or_else(|| endpoints.first())
            .map(String::as_str)
    }
}
