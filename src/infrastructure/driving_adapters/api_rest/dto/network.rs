//! Network DTOs
//!
//! Data transfer objects for network API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::use_cases::networks::RegistryStatus;
use crate::domain::models::network::{ApiUrl, FirehoseInfo, Network, Services};

/// Query for listing networks
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ListNetworksQuery {
    #[validate(length(min = 1, max = 32, message = "service must be between 1 and 32 characters"))]
    pub service: Option<String>,
}

/// Query for the first-streamable-block lookup
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FirstStreamableBlockQuery {
    pub height: u64,

    #[validate(length(min = 1, max = 130, message = "hash must be between 1 and 130 characters"))]
    pub hash: String,
}

/// Query for the endpoint lookup
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EndpointQuery {
    #[validate(length(min = 1, max = 32, message = "service must be between 1 and 32 characters"))]
    pub service: String,

    #[validate(length(min = 1, max = 500, message = "endpoint must be between 1 and 500 characters"))]
    pub endpoint: String,
}

/// Services section of a network response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesDto {
    pub subgraphs: Vec<String>,
    pub sps: Vec<String>,
    pub firehose: Vec<String>,
    pub substreams: Vec<String>,
}

impl From<&Services> for ServicesDto {
    fn from(services: &Services) -> Self {
        Self {
            subgraphs: services.subgraphs.clone(),
            sps: services.sps.clone(),
            firehose: services.firehose.clone(),
            substreams: services.substreams.clone(),
        }
    }
}

/// First streamable block of a network response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstStreamableBlockDto {
    pub height: u64,
    pub id: String,
}

/// Firehose section of a network response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirehoseDto {
    pub block_type: String,
    pub buf_url: String,
    pub bytes_encoding: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_streamable_block: Option<FirstStreamableBlockDto>,
}

impl From<&FirehoseInfo> for FirehoseDto {
    fn from(firehose: &FirehoseInfo) -> Self {
        Self {
            block_type: firehose.block_type.clone(),
            buf_url: firehose.buf_url.clone(),
            bytes_encoding: firehose.bytes_encoding.to_string(),
            first_streamable_block: firehose
                .first_streamable_block
                .as_ref()
                .map(|block| FirstStreamableBlockDto {
                    height: block.height,
                    id: block.id.clone(),
                }),
        }
    }
}

/// API descriptor of a network response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUrlDto {
    pub url: String,
    pub kind: String,
}

impl From<&ApiUrl> for ApiUrlDto {
    fn from(api: &ApiUrl) -> Self {
        Self {
            url: api.url.clone(),
            kind: api.kind.clone(),
        }
    }
}

/// DTO for network response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponseDto {
    pub id: String,
    pub full_name: String,
    pub short_name: String,
    pub aliases: Vec<String>,
    pub caip2_id: String,
    pub network_type: String,
    pub services: ServicesDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firehose: Option<FirehoseDto>,
    pub rpc_urls: Vec<String>,
    pub explorer_urls: Vec<String>,
    pub api_urls: Vec<ApiUrlDto>,
}

impl From<&Network> for NetworkResponseDto {
    fn from(network: &Network) -> Self {
        Self {
            id: network.id().to_string(),
            full_name: network.full_name().to_string(),
            short_name: network.short_name().to_string(),
            aliases: network.aliases().to_vec(),
            caip2_id: network.caip2_id().to_string(),
            network_type: network.network_type().to_string(),
            services: ServicesDto::from(network.services()),
            firehose: network.firehose().map(FirehoseDto::from),
            rpc_urls: network.rpc_urls().to_vec(),
            explorer_urls: network.explorer_urls().to_vec(),
            api_urls: network.api_urls().iter().map(ApiUrlDto::from).collect(),
        }
    }
}

/// DTO for a preferred endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferredEndpointResponseDto {
    pub network_id: String,
    pub service: String,
    pub endpoint: String,
}

/// DTO for the registry status response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStatusResponseDto {
    pub origin: String,
    pub loaded_at: DateTime<Utc>,
    pub network_count: usize,
}

impl From<RegistryStatus> for RegistryStatusResponseDto {
    fn from(status: RegistryStatus) -> Self {
        Self {
            origin: status.origin.as_str().to_string(),
            loaded_at: status.loaded_at,
            network_count: status.network_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::network::fixtures::network_with_block;

    #[test]
    fn test_network_response_from_domain() {
        let network = network_with_block("mainnet", 0, "0xabc");
        let dto = NetworkResponseDto::from(&network);

        assert_eq!(dto.id, "mainnet");
        assert_eq!(dto.network_type, "mainnet");
        let firehose = dto.firehose.unwrap();
        assert_eq!(firehose.bytes_encoding, "hex");
        assert_eq!(firehose.first_streamable_block.unwrap().id, "0xabc");
    }

    #[test]
    fn test_network_response_serializes_camel_case() {
        let network = network_with_block("mainnet", 0, "0xabc");
        let json = serde_json::to_value(NetworkResponseDto::from(&network)).unwrap();

        assert!(json.get("fullName").is_some());
        assert!(json["firehose"].get("firstStreamableBlock").is_some());
    }

    #[test]
    fn test_endpoint_query_validation() {
        let query = EndpointQuery {
            service: "substreams".to_string(),
            endpoint: String::new(),
        };
        assert!(query.validate().is_err());
    }
}
