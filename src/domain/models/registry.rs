//! Network Registry Snapshot
//!
//! A complete, self-consistent mapping from network id to network record at one
//! point in time, with the read-only lookups resolved against it.
//!
//! A snapshot is built once and never mutated after it has been published; a
//! refresh builds a brand new snapshot that replaces the old one wholesale.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::models::network::{Network, NetworkId};
use crate::domain::models::service::ServiceKind;

/// Where the records of a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOrigin {
    /// The live remote registry
    Remote,
    /// The snapshot bundled with the binary
    Embedded,
}

impl SnapshotOrigin {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Embedded => "embedded",
        }
    }
}

/// Registry snapshot keyed by network id
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: HashMap<NetworkId, Arc<Network>>,
    origin: SnapshotOrigin,
    loaded_at: DateTime<Utc>,
}

impl NetworkRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new(origin: SnapshotOrigin) -> Self {
        Self {
            networks: HashMap::new(),
            origin,
            loaded_at: Utc::now(),
        }
    }

    /// Index networks by id; a later record with the same id replaces an earlier one
    #[must_use]
    pub fn from_networks(origin: SnapshotOrigin, networks: impl IntoIterator<Item = Network>) -> Self {
        let mut registry = Self::new(origin);
        for network in networks {
            registry.insert_network(network, true);
        }
        registry
    }

    /// Insert a network, keeping an existing record with the same id unless `forced`
    ///
    /// Returns whether the network was inserted.
    pub fn insert_network(&mut self, network: Network, forced: bool) -> bool {
        if !forced && self.networks.contains_key(network.id()) {
            return false;
        }
        self.networks.insert(network.id().clone(), Arc::new(network));
        true
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Network>> {
        self.networks.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.networks.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    #[must_use]
    pub fn origin(&self) -> SnapshotOrigin {
        self.origin
    }

    #[must_use]
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Iterate records in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Network>> {
        self.networks.values()
    }

    /// Records sorted by ascending id
    #[must_use]
    pub fn sorted(&self) -> Vec<&Arc<Network>> {
        let mut networks: Vec<_> = self.networks.values().collect();
        networks.sort_by(|a, b| a.id().cmp(b.id()));
        networks
    }

    /// Find a network by id, or else by alias, full name or short name
    ///
    /// An exact id match wins. Otherwise records are scanned in ascending id
    /// order so that an ambiguous key always resolves to the lowest id.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Arc<Network>> {
        if let Some(network) = self.networks.get(key) {
            return Some(network);
        }
        self.sorted().into_iter().find(|network| network.answers_to(key))
    }

    /// Sub-registry of the networks advertising at least one endpoint for `service`
    #[must_use]
    pub fn filter_by_service(&self, service: ServiceKind) -> NetworkRegistry {
        let networks = self
            .networks
            .iter()
            .filter(|(_, network)| !network.endpoints(service).is_empty())
            .map(|(id, network)| (id.clone(), Arc::clone(network)))
            .collect();

        Self {
            networks,
            origin: self.origin,
            loaded_at: self.loaded_at,
        }
    }

    /// Find the network whose first streamable block has the given height and hash
    #[must_use]
    pub fn find_by_first_streamable_block(&self, height: u64, hash: &str) -> Option<&Arc<Network>> {
        self.networks.values().find(|network| {
            network
                .first_streamable_block()
                .is_some_and(|block| block.height == height && hashes_match(&block.id, hash))
        })
    }

    /// Find the first network advertising `endpoint` for `service`
    #[must_use]
    pub fn find_by_endpoint(&self, service: ServiceKind, endpoint: &str) -> Option<&Arc<Network>> {
        self.networks
            .values()
            .find(|network| network.endpoints(service).iter().any(|candidate| candidate == endpoint))
    }
}

// some chains render hashes with a 0x prefix, some don't
fn strip_hex_prefix(hash: &str) -> &str {
    hash.strip_prefix("0x")
        .or_else(|| hash.strip_prefix("0X"))
        .unwrap_or(hash)
}

/// Compare two block hashes ignoring a `0x` prefix; hex is compared case-insensitively
fn hashes_match(stored: &str, queried: &str) -> bool {
    let stored = strip_hex_prefix(stored);
    let queried = strip_hex_prefix(queried);

    let is_hex = |s: &str| s.bytes().all(|b| b.is_ascii_hexdigit());
    if is_hex(stored) && is_hex(queried) {
        stored.eq_ignore_ascii_case(queried)
    } else {
        stored == queried
    }
}
