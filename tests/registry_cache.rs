//! Integration tests for registry acquisition
//!
//! Exercise the registry cache against a wiremock-served remote registry and
//! the bundled snapshot: fallback, repair, total failure, scheduled refresh.

mod common;

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use wiremock::MockServer;

use blockchain_network_resolver::domain::gateways::RegistrySource;
use blockchain_network_resolver::domain::models::registry::SnapshotOrigin;
use blockchain_network_resolver::domain::models::service::ServiceKind;
use blockchain_network_resolver::infrastructure::driven_adapters::registry_source::EmbeddedRegistrySource;
use blockchain_network_resolver::shared::errors::{RegistryError, SourceError};

use common::{
    cache_for, eventually, http_source, mount_failure, mount_registry, network_json, registry_document,
};

#[tokio::test]
async fn test_http_source_decodes_registry() {
    let server = MockServer::start().await;
    mount_registry(
        &server,
        registry_document(vec![network_json("mainnet", &["eth"], &["mainnet.eth.streamingfast.io:443"])]),
        None,
    )
    .await;

    let source = http_source(&server);
    assert!(source.url().ends_with(common::REGISTRY_PATH));
    let networks = source.fetch().await.unwrap();

    assert_eq!(networks.len(), 1);
    assert_eq!(networks[0].id().as_str(), "mainnet");
    assert_eq!(
        networks[0].endpoints(ServiceKind::Substreams),
        ["mainnet.eth.streamingfast.io:443".to_string()]
    );
}

#[tokio::test]
async fn test_http_source_reports_transport_and_decode_errors() {
    let server = MockServer::start().await;
    mount_failure(&server, 503, Some(1)).await;

    let result = http_source(&server).fetch().await;
    assert!(matches!(result, Err(SourceError::Transport(_))));

    server.reset().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = http_source(&server).fetch().await;
    assert!(matches!(result, Err(SourceError::Decode(_))));
}

#[tokio::test]
async fn test_remote_load_includes_overrides_without_repair() {
    let server = MockServer::start().await;
    mount_registry(&server, registry_document(vec![network_json("mainnet", &["eth"], &[])]), None).await;
    let cache = cache_for(&server, EmbeddedRegistrySource::default());

    let snapshot = cache.snapshot().await.unwrap();

    assert_eq!(snapshot.origin(), SnapshotOrigin::Remote);
    assert!(snapshot.find("eth").is_some());
    assert!(snapshot.find("acme-dummy").is_some());
    assert!(!cache.is_repairing());
}

#[tokio::test]
async fn test_remote_load_tolerates_unfamiliar_record_values() {
    let server = MockServer::start().await;
    let mut rollup = network_json("rollup", &["rl"], &[]);
    rollup["networkType"] = serde_json::json!("l2-rollup");
    rollup["firehose"] = serde_json::json!({ "blockType": "sf.rollup.v1.Block", "bytesEncoding": "base32" });
    let nameless = network_json("", &[], &[]);
    mount_registry(
        &server,
        registry_document(vec![network_json("mainnet", &["eth"], &[]), rollup, nameless]),
        None,
    )
    .await;
    let cache = cache_for(&server, EmbeddedRegistrySource::default());

    let snapshot = cache.snapshot().await.unwrap();

    assert_eq!(snapshot.origin(), SnapshotOrigin::Remote);
    assert!(snapshot.find("eth").is_some());
    assert_eq!(snapshot.find("rl").unwrap().network_type().as_str(), "l2-rollup");
    assert_eq!(snapshot.find("rl").unwrap().bytes_encoding().as_str(), "base32");
    assert!(snapshot.find("").is_none());
    assert!(!cache.is_repairing());
}

#[tokio::test]
async fn test_upstream_record_wins_over_override() {
    let server = MockServer::start().await;
    mount_registry(
        &server,
        registry_document(vec![network_json("acme-dummy-blockchain", &["upstream-acme"], &[])]),
        None,
    )
    .await;
    let cache = cache_for(&server, EmbeddedRegistrySource::default());

    let snapshot = cache.snapshot().await.unwrap();
    let acme = snapshot.get("acme-dummy-blockchain").unwrap();

    assert_eq!(acme.aliases(), ["upstream-acme".to_string()]);
    assert!(acme.endpoints(ServiceKind::Substreams).is_empty());
}

#[tokio::test]
async fn test_fallback_then_repair_from_remote() {
    let server = MockServer::start().await;
    mount_failure(&server, 500, None).await;
    let cache = cache_for(&server, EmbeddedRegistrySource::default());

    // usable immediately with embedded data
    let degraded = cache.snapshot().await.unwrap();
    assert_eq!(degraded.origin(), SnapshotOrigin::Embedded);
    assert!(degraded.find("eth").is_some());
    assert!(degraded.find("remote-only").is_none());
    assert!(cache.is_repairing());

    // remote recovers
    server.reset().await;
    mount_registry(
        &server,
        registry_document(vec![network_json("remote-only", &["ro"], &[])]),
        None,
    )
    .await;

    eventually(|| {
        let cache = cache.clone();
        async move { cache.snapshot().await.unwrap().find("ro").is_some() }
    })
    .await;

    let repaired = cache.snapshot().await.unwrap();
    assert_eq!(repaired.origin(), SnapshotOrigin::Remote);
    eventually(|| {
        let cache = cache.clone();
        async move { !cache.is_repairing() }
    })
    .await;

    // the degraded snapshot handed out earlier is untouched
    assert_eq!(degraded.origin(), SnapshotOrigin::Embedded);
}

#[tokio::test]
async fn test_both_sources_failing_is_fatal() {
    let server = MockServer::start().await;
    mount_failure(&server, 500, None).await;
    let cache = cache_for(&server, EmbeddedRegistrySource::from_bytes(b"{ not a registry".to_vec()));

    let err = cache.snapshot().await.unwrap_err();

    assert!(matches!(
        err,
        RegistryError::NoBaseline {
            remote: SourceError::Transport(_),
            embedded: SourceError::Decode(_),
        }
    ));
    assert!(!cache.is_repairing());
    assert!(cache.snapshot().await.is_err());
}

#[tokio::test]
async fn test_shutdown_stops_repair() {
    let server = MockServer::start().await;
    mount_failure(&server, 500, None).await;
    let cache = cache_for(&server, EmbeddedRegistrySource::default());

    cache.snapshot().await.unwrap();
    assert!(cache.is_repairing());

    tokio::time::timeout(Duration::from_secs(5), cache.shutdown())
        .await
        .expect("repair task should stop promptly");
    assert!(!cache.is_repairing());
    assert_eq!(cache.snapshot().await.unwrap().origin(), SnapshotOrigin::Embedded);
}

#[tokio::test]
async fn test_scheduled_refresh_picks_up_new_networks() {
    let server = MockServer::start().await;
    mount_registry(&server, registry_document(vec![network_json("mainnet", &[], &[])]), Some(1)).await;
    mount_failure(&server, 502, Some(1)).await;
    mount_registry(
        &server,
        registry_document(vec![network_json("mainnet", &[], &[]), network_json("base", &[], &[])]),
        None,
    )
    .await;
    let cache = cache_for(&server, EmbeddedRegistrySource::default());

    let initial = cache.snapshot().await.unwrap();
    assert!(initial.find("base").is_none());

    let token = CancellationToken::new();
    let handle = cache
        .start_scheduled_refresh(Duration::from_millis(50), token.clone())
        .unwrap();

    eventually(|| {
        let cache = cache.clone();
        async move { cache.snapshot().await.unwrap().find("base").is_some() }
    })
    .await;

    token.cancel();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("refresh task should stop promptly")
        .unwrap();

    let requests = server.received_requests().await.unwrap_or_default().len();
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), requests);
}

#[tokio::test]
async fn test_concurrent_first_access_loads_once() {
    let server = MockServer::start().await;
    mount_registry(&server, registry_document(vec![network_json("mainnet", &[], &[])]), None).await;
    let cache = cache_for(&server, EmbeddedRegistrySource::default());

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let cache = cache.clone();
            tokio::spawn(async move { cache.snapshot().await.map(|snapshot| Arc::as_ptr(&snapshot) as usize) })
        })
        .collect();

    let mut pointers = Vec::new();
    for handle in handles {
        pointers.push(handle.await.unwrap().unwrap());
    }
    pointers.dedup();

    assert_eq!(pointers.len(), 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
