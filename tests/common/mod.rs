//! Common test utilities for integration tests
//!
//! Provides a mock remote registry served by wiremock, registry document
//! builders, and a test application wired to a real registry cache.

#![allow(dead_code)]

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use blockchain_network_resolver::application::registry::{BackoffPolicy, RegistryCache, RegistryLoader};
use blockchain_network_resolver::domain::services::EndpointSelector;
use blockchain_network_resolver::infrastructure::driven_adapters::registry_source::{
    EmbeddedRegistrySource, HttpRegistrySource,
};
use blockchain_network_resolver::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Path the mock remote registry is served on
pub const REGISTRY_PATH: &str = "/TheGraphNetworksRegistry.json";

/// Registry document wrapping the given network entries
pub fn registry_document(networks: Vec<Value>) -> Value {
    json!({
        "version": "0.7.6",
        "networks": networks,
    })
}

/// Network entry in the published registry format
pub fn network_json(id: &str, aliases: &[&str], substreams: &[&str]) -> Value {
    json!({
        "id": id,
        "fullName": format!("{id} full name"),
        "shortName": id.to_uppercase(),
        "aliases": aliases,
        "caip2Id": format!("eip155:{id}"),
        "networkType": "mainnet",
        "services": { "substreams": substreams },
    })
}

/// Network entry carrying a first streamable block
pub fn network_with_block_json(id: &str, height: u64, hash: &str) -> Value {
    let mut network = network_json(id, &[], &[]);
    network["firehose"] = json!({
        "blockType": "sf.ethereum.type.v2.Block",
        "bufUrl": "https://buf.build/streamingfast/firehose-ethereum",
        "bytesEncoding": "hex",
        "firstStreamableBlock": { "height": height, "id": hash },
    });
    network
}

/// Mount a successful registry response, optionally limited to `times` requests
pub async fn mount_registry(server: &MockServer, document: Value, times: Option<u64>) {
    let mock = Mock::given(method("GET"))
        .and(path(REGISTRY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(document));
    match times {
        Some(times) => mock.up_to_n_times(times).mount(server).await,
        None => mock.mount(server).await,
    }
}

/// Mount a failing registry response
pub async fn mount_failure(server: &MockServer, status: u16, times: Option<u64>) {
    let mock = Mock::given(method("GET"))
        .and(path(REGISTRY_PATH))
        .respond_with(ResponseTemplate::new(status));
    match times {
        Some(times) => mock.up_to_n_times(times).mount(server).await,
        None => mock.mount(server).await,
    }
}

/// HTTP source pointed at the mock server
pub fn http_source(server: &MockServer) -> HttpRegistrySource {
    HttpRegistrySource::new(format!("{}{}", server.uri(), REGISTRY_PATH), Duration::from_secs(5))
        .expect("Failed to build HTTP registry source")
}

/// Backoff short enough for real-time tests
pub fn fast_backoff() -> BackoffPolicy {
    BackoffPolicy {
        initial_delay: Duration::from_millis(10),
        max_delay: Duration::from_millis(50),
        multiplier: 2.0,
        jitter_factor: 0.0,
    }
}

/// Cache over the mock remote registry and the given embedded source
pub fn cache_for(server: &MockServer, embedded: EmbeddedRegistrySource) -> RegistryCache {
    RegistryCache::new(
        Arc::new(http_source(server)),
        Arc::new(embedded),
        RegistryLoader::with_default_overrides().expect("valid overrides"),
        fast_backoff(),
    )
}

/// Poll `check` until it holds, failing the test after a few seconds
pub async fn eventually<F, Fut>(mut check: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    for _ in 0..200 {
        if check().await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("condition not met in time");
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub cache: RegistryCache,
    pub server: MockServer,
}

impl TestApp {
    /// Create a test application whose remote registry serves `networks`
    pub async fn new(networks: Vec<Value>) -> Self {
        let server = MockServer::start().await;
        mount_registry(&server, registry_document(networks), None).await;

        let cache = cache_for(&server, EmbeddedRegistrySource::default());
        let state = AppState::new(Arc::new(cache.clone()), EndpointSelector::default());

        Self {
            router: api_rest::router(state),
            cache,
            server,
        }
    }

    /// Create a test application with the sample networks used across the e2e tests
    pub async fn with_sample_networks() -> Self {
        Self::new(vec![
            network_json(
                "mainnet",
                &["eth", "ethereum"],
                &["a.example:443", "mainnet.eth.streamingfast.io:443"],
            ),
            network_json("cronos", &[], &[]),
            network_with_block_json(
                "moonbeam",
                0,
                "0x7e6b3bbed86828a558271c9c9f62354b1d8b5aa15ff85fd6f1e7cbe9af9dde7e",
            ),
        ])
        .await
    }
}
