//! Network Domain Model
//!
//! Represents a blockchain network as described by the networks registry.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::domain::models::service::ServiceKind;
use crate::shared::errors::DomainError;

/// Newtype wrapper for Network ID providing type safety
///
/// A network ID is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkId(String);

impl NetworkId {
    /// Create a NetworkId, rejecting empty or blank values
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidState("network id must not be empty".to_string()));
        }
        Ok(Self(id))
    }

    /// Get the underlying string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for NetworkId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for NetworkId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::borrow::Borrow<str> for NetworkId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Network category
///
/// Categories this crate does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NetworkType {
    Mainnet,
    Testnet,
    Devnet,
    Beacon,
    Other(String),
}

impl NetworkType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
            Self::Beacon => "beacon",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NetworkType {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Self::Mainnet,
            "testnet" => Self::Testnet,
            "devnet" => Self::Devnet,
            "beacon" => Self::Beacon,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl FromStr for NetworkType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// How block hashes and other bytes are rendered for a chain
///
/// Encodings this crate does not know are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BytesEncoding {
    #[default]
    Hex,
    ZeroXHex,
    Base58,
    Base64,
    Other(String),
}

impl BytesEncoding {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hex => "hex",
            Self::ZeroXHex => "0xhex",
            Self::Base58 => "base58",
            Self::Base64 => "base64",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for BytesEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for BytesEncoding {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Self::Hex,
            "0xhex" => Self::ZeroXHex,
            "base58" => Self::Base58,
            "base64" => Self::Base64,
            _ => Self::Other(s.to_string()),
        }
    }
}

impl FromStr for BytesEncoding {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Earliest block a network's streaming service can serve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstStreamableBlock {
    pub height: u64,
    pub id: String,
}

/// Firehose-specific block provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirehoseInfo {
    pub block_type: String,
    pub buf_url: String,
    pub bytes_encoding: BytesEncoding,
    pub first_streamable_block: Option<FirstStreamableBlock>,
}

/// Per-service endpoint lists, each in advertised order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Services {
    pub subgraphs: Vec<String>,
    pub sps: Vec<String>,
    pub firehose: Vec<String>,
    pub substreams: Vec<String>,
}

impl Services {
    /// Endpoints advertised for the given service
    #[must_use]
    pub fn endpoints(&self, kind: ServiceKind) -> &[String] {
        match kind {
            ServiceKind::Subgraphs => &self.subgraphs,
            ServiceKind::Sps => &self.sps,
            ServiceKind::Firehose => &self.firehose,
            ServiceKind::Substreams => &self.substreams,
        }
    }
}

/// Descriptor of an API (block explorer API, etc.) exposed for a network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl {
    pub kind: String,
    pub url: String,
}

/// Data required to build a Network
#[derive(Debug, Clone)]
pub struct NetworkData {
    pub id: String,
    pub full_name: String,
    pub short_name: String,
    pub aliases: Vec<String>,
    pub caip2_id: String,
    pub network_type: NetworkType,
    pub services: Services,
    pub firehose: Option<FirehoseInfo>,
    pub rpc_urls: Vec<String>,
    pub explorer_urls: Vec<String>,
    pub api_urls: Vec<ApiUrl>,
}

/// Network domain entity, immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    id: NetworkId,
    full_name: String,
    short_name: String,
    aliases: Vec<String>,
    caip2_id: String,
    network_type: NetworkType,
    services: Services,
    firehose: Option<FirehoseInfo>,
    rpc_urls: Vec<String>,
    explorer_urls: Vec<String>,
    api_urls: Vec<ApiUrl>,
}

impl Network {
    /// Create a Network from its data
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the id is empty.
    pub fn new(data: NetworkData) -> Result<Self, DomainError> {
        Ok(Self {
            id: NetworkId::new(data.id)?,
            full_name: data.full_name,
            short_name: data.short_name,
            aliases: data.aliases,
            caip2_id: data.caip2_id,
            network_type: data.network_type,
            services: data.services,
            firehose: data.firehose,
            rpc_urls: data.rpc_urls,
            explorer_urls: data.explorer_urls,
            api_urls: data.api_urls,
        })
    }

    /// Whether `key` names this network by alias, full name or short name
    #[must_use]
    pub fn answers_to(&self, key: &str) -> bool {
        self.aliases.iter().any(|alias| alias == key) || self.full_name == key || self.short_name == key
    }

    /// Endpoints advertised for the given service
    #[must_use]
    pub fn endpoints(&self, kind: ServiceKind) -> &[String] {
        self.services.endpoints(kind)
    }

    /// Byte encoding used by the chain, `Hex` when the record carries no block provenance
    #[must_use]
    pub fn bytes_encoding(&self) -> BytesEncoding {
        self.firehose
            .as_ref()
            .map_or(BytesEncoding::Hex, |firehose| firehose.bytes_encoding.clone())
    }

    /// First streamable block, if the record carries one
    #[must_use]
    pub fn first_streamable_block(&self) -> Option<&FirstStreamableBlock> {
        self.firehose.as_ref()?.first_streamable_block.as_ref()
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &NetworkId {
        &self.id
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    #[must_use]
    pub fn caip2_id(&self) -> &str {
        &self.caip2_id
    }

    #[must_use]
    pub fn network_type(&self) -> &NetworkType {
        &self.network_type
    }

    #[must_use]
    pub fn services(&self) -> &Services {
        &self.services
    }

    #[must_use]
    pub fn firehose(&self) -> Option<&FirehoseInfo> {
        self.firehose.as_ref()
    }

    #[must_use]
    pub fn rpc_urls(&self) -> &[String] {
        &self.rpc_urls
    }

    #[must_use]
    pub fn explorer_urls(&self) -> &[String] {
        &self.explorer_urls
    }

    #[must_use]
    pub fn api_urls(&self) -> &[ApiUrl] {
        &self.api_urls
    }
}
