//! Network Overrides
//!
//! Locally defined networks merged into every registry load. An override is
//! only inserted when the upstream registry has no record with the same id.

use crate::domain::models::network::{
    BytesEncoding, FirehoseInfo, FirstStreamableBlock, Network, NetworkData, NetworkType, Services,
};
use crate::shared::errors::DomainError;

/// Id of the dummy blockchain used for operator demonstrations
pub const ACME_DUMMY_BLOCKCHAIN_ID: &str = "acme-dummy-blockchain";

/// Dummy blockchain used for operator demonstration purposes
///
/// # Errors
///
/// Never fails in practice; the id is a non-empty constant.
pub fn acme_dummy_blockchain() -> Result<Network, DomainError> {
    Network::new(NetworkData {
        id: ACME_DUMMY_BLOCKCHAIN_ID.to_string(),
        full_name: "Acme Dummy Blockchain".to_string(),
        short_name: "Acme".to_string(),
        aliases: vec!["acme-dummy".to_string(), "dummy-blockchain".to_string()],
        caip2_id: "acme:dummy-blockchain".to_string(),
        network_type: NetworkType::Devnet,
        services: Services {
            firehose: vec!["localhost:10015".to_string()],
            substreams: vec!["localhost:10016".to_string()],
            ..Services::default()
        },
        firehose: Some(FirehoseInfo {
            block_type: "sf.acme.type.v1.Block".to_string(),
            buf_url: "https://buf.build/streamingfast/firehose-acme".to_string(),
            bytes_encoding: BytesEncoding::Hex,
            first_streamable_block: Some(FirstStreamableBlock {
                height: 0,
                id: "0x0000000000000000000000000000000000000000000000000000000000000000".to_string(),
            }),
        }),
        rpc_urls: vec![],
        explorer_urls: vec![],
        api_urls: vec![],
    })
}

/// Overrides applied by default, in declaration order
///
/// # Errors
///
/// Returns `DomainError` if an override record is malformed.
pub fn network_overrides() -> Result<Vec<Network>, DomainError> {
    Ok(vec![acme_dummy_blockchain()?])
}
