//! REST API Module
//!
//! Contains HTTP handlers and DTOs for the read-only query API.

pub mod dto;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::networks::{
    FindByEndpointUseCase, FindByFirstStreamableBlockUseCase, FindNetworkUseCase, GetPreferredEndpointUseCase,
    GetRegistryStatusUseCase, ListNetworksByServiceUseCase,
};
use crate::domain::gateways::RegistryProvider;
use crate::domain::services::EndpointSelector;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub list_networks_by_service_use_case: Arc<ListNetworksByServiceUseCase>,
    pub find_network_use_case: Arc<FindNetworkUseCase>,
    pub find_by_first_streamable_block_use_case: Arc<FindByFirstStreamableBlockUseCase>,
    pub find_by_endpoint_use_case: Arc<FindByEndpointUseCase>,
    pub get_preferred_endpoint_use_case: Arc<GetPreferredEndpointUseCase>,
    pub get_registry_status_use_case: Arc<GetRegistryStatusUseCase>,
}

impl AppState {
    /// Wire every use case to the same registry provider
    #[must_use]
    pub fn new(registry_provider: Arc<dyn RegistryProvider>, selector: EndpointSelector) -> Self {
        Self {
            list_networks_by_service_use_case: Arc::new(ListNetworksByServiceUseCase::new(registry_provider.clone())),
            find_network_use_case: Arc::new(FindNetworkUseCase::new(registry_provider.clone())),
            find_by_first_streamable_block_use_case: Arc::new(FindByFirstStreamableBlockUseCase::new(
                registry_provider.clone(),
            )),
            find_by_endpoint_use_case: Arc::new(FindByEndpointUseCase::new(registry_provider.clone())),
            get_preferred_endpoint_use_case: Arc::new(GetPreferredEndpointUseCase::new(
                registry_provider.clone(),
                selector,
            )),
            get_registry_status_use_case: Arc::new(GetRegistryStatusUseCase::new(registry_provider)),
        }
    }
}

/// Build the full router with tracing and CORS layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/networks", handlers::networks::router())
        .nest("/lookup", handlers::lookup::router())
        .nest("/registry", handlers::registry::router())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
