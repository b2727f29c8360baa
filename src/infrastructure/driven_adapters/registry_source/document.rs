//! Registry Document
//!
//! Serde model of the published networks registry JSON and its mapping to
//! domain networks. Fields the resolver does not use are ignored.

use serde::Deserialize;

use crate::domain::models::network::{
    ApiUrl, BytesEncoding, FirehoseInfo, FirstStreamableBlock, Network, NetworkData, NetworkType, Services,
};
use crate::shared::errors::SourceError;

/// Top-level registry document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryDocument {
    #[serde(default)]
    pub version: Option<String>,
    pub networks: Vec<NetworkRecordDto>,
}

/// One network entry of the registry document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecordDto {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub caip2_id: String,
    pub network_type: String,
    #[serde(default)]
    pub services: ServicesDto,
    #[serde(default)]
    pub firehose: Option<FirehoseDto>,
    #[serde(default)]
    pub rpc_urls: Vec<String>,
    #[serde(default)]
    pub explorer_urls: Vec<String>,
    #[serde(default)]
    pub api_urls: Vec<ApiUrlDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesDto {
    #[serde(default)]
    pub subgraphs: Vec<String>,
    #[serde(default)]
    pub sps: Vec<String>,
    #[serde(default)]
    pub firehose: Vec<String>,
    #[serde(default)]
    pub substreams: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirehoseDto {
    #[serde(default)]
    pub block_type: String,
    #[serde(default)]
    pub buf_url: String,
    #[serde(default = "default_bytes_encoding")]
    pub bytes_encoding: String,
    #[serde(default)]
    pub first_streamable_block: Option<FirstStreamableBlockDto>,
}

fn default_bytes_encoding() -> String {
    "hex".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstStreamableBlockDto {
    pub height: u64,
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUrlDto {
    pub url: String,
    pub kind: String,
}

impl TryFrom<NetworkRecordDto> for Network {
    type Error = SourceError;

    fn try_from(dto: NetworkRecordDto) -> Result<Self, Self::Error> {
        let firehose = dto.firehose.map(|firehose| FirehoseInfo {
            block_type: firehose.block_type,
            buf_url: firehose.buf_url,
            bytes_encoding: BytesEncoding::from(firehose.bytes_encoding.as_str()),
            first_streamable_block: firehose
                .first_streamable_block
                .map(|block| FirstStreamableBlock {
                    height: block.height,
                    id: block.id,
                }),
        });

        Ok(Network::new(NetworkData {
            id: dto.id,
            full_name: dto.full_name,
            short_name: dto.short_name,
            aliases: dto.aliases,
            caip2_id: dto.caip2_id,
            network_type: NetworkType::from(dto.network_type.as_str()),
            services: Services {
                subgraphs: dto.services.subgraphs,
                sps: dto.services.sps,
                firehose: dto.services.firehose,
                substreams: dto.services.substreams,
            },
            firehose,
            rpc_urls: dto.rpc_urls,
            explorer_urls: dto.explorer_urls,
            api_urls: dto
                .api_urls
                .into_iter()
                .map(|api| ApiUrl {
                    kind: api.kind,
                    url: api.url,
                })
                .collect(),
        })?)
    }
}

/// Decode a registry document into domain networks
///
/// # Errors
///
/// Returns `SourceError::Decode` for malformed JSON. Records that cannot be
/// represented, such as one with an empty id, are skipped with a warning.
pub fn decode(bytes: &[u8]) -> Result<Vec<Network>, SourceError> {
    let document: RegistryDocument = serde_json::from_slice(bytes)?;
    tracing::trace!(
        version = document.version.as_deref().unwrap_or("unknown"),
        networks = document.networks.len(),
        "Decoded networks registry document"
    );

    let networks = document
        .networks
        .into_iter()
        .filter_map(|record| {
            let full_name = record.full_name.clone();
            match Network::try_from(record) {
                Ok(network) => Some(network),
                Err(err) => {
                    tracing::warn!(full_name = %full_name, error = %err, "Skipping invalid network record");
                    None
                }
            }
        })
        .collect();

    Ok(networks)
}
