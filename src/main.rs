//! Blockchain Network Resolver - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blockchain_network_resolver::application::registry::{BackoffPolicy, RegistryCache, RegistryLoader};
use blockchain_network_resolver::domain::services::EndpointSelector;
use blockchain_network_resolver::infrastructure::driven_adapters::config::AppConfig;
use blockchain_network_resolver::infrastructure::driven_adapters::registry_source::{
    EmbeddedRegistrySource, HttpRegistrySource,
};
use blockchain_network_resolver::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blockchain_network_resolver=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create registry sources and cache
    let remote = Arc::new(HttpRegistrySource::new(
        config.registry.remote_url.clone(),
        config.registry.request_timeout(),
    )?);
    let embedded = Arc::new(EmbeddedRegistrySource::default());
    let loader = RegistryLoader::with_default_overrides()?;
    tracing::info!(
        url = remote.url(),
        overrides = loader.overrides().len(),
        "Registry sources configured"
    );
    let cache = RegistryCache::new(
        remote,
        embedded,
        loader,
        BackoffPolicy::from(&config.registry.backoff),
    );

    // Establish the baseline now; without one the process cannot serve anything
    let snapshot = cache.snapshot().await?;
    tracing::info!(
        origin = snapshot.origin().as_str(),
        networks = snapshot.len(),
        "Networks registry ready"
    );

    // Start scheduled refresh
    let shutdown = CancellationToken::new();
    let refresh = match config.registry.refresh_interval() {
        Some(interval) => Some(cache.start_scheduled_refresh(interval, shutdown.child_token())?),
        None => None,
    };

    // Build router
    let selector = EndpointSelector::new(config.registry.preferred_endpoint_markers.clone());
    let app = api_rest::router(AppState::new(Arc::new(cache.clone()), selector));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    let signal = shutdown.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "Failed to listen for shutdown signal");
            }
            signal.cancel();
        })
        .await?;

    // Stop background tasks
    shutdown.cancel();
    if let Some(refresh) = refresh {
        refresh.await?;
    }
    cache.shutdown().await;
    tracing::info!("Shutdown complete");

    Ok(())
}
