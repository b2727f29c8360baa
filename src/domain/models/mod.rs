//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod network;
pub mod overrides;
pub mod registry;
pub mod service;

pub use network::{
    ApiUrl, BytesEncoding, FirehoseInfo, FirstStreamableBlock, Network, NetworkData, NetworkId, NetworkType,
    Services,
};
pub use registry::{NetworkRegistry, SnapshotOrigin};
pub use service::ServiceKind;
