//! Network Handlers
//!
//! HTTP handlers resolving network keys against the current registry.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::application::use_cases::networks::PreferredEndpoint;
use crate::domain::models::service::ServiceKind;
use crate::infrastructure::driving_adapters::api_rest::dto::network::{
    ListNetworksQuery, NetworkResponseDto, PreferredEndpointResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for network endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_networks))
        .route("/:key", get(find_network))
        .route("/:key/endpoints/:service", get(preferred_endpoint))
}

/// GET /networks - List networks, optionally only those exposing a service
///
/// # Responses
///
/// * 200 OK - Networks sorted by id
/// * 400 Bad Request - Unknown service
/// * 503 Service Unavailable - No registry baseline
#[axum::debug_handler]
async fn list_networks(
    State(state): State<AppState>,
    Query(query): Query<ListNetworksQuery>,
) -> Result<Json<Vec<NetworkResponseDto>>, ApiError> {
    query.validate()?;

    let service = query.service.as_deref().map(str::parse::<ServiceKind>).transpose()?;
    let registry = state.list_networks_by_service_use_case.execute(service).await?;

    let response = registry
        .sorted()
        .into_iter()
        .map(|network| NetworkResponseDto::from(network.as_ref()))
        .collect();
    Ok(Json(response))
}

/// GET /networks/:key - Find a network by id, alias or name
///
/// # Responses
///
/// * 200 OK - Network found
/// * 404 Not Found - No network answers to the key
/// * 503 Service Unavailable - No registry baseline
#[axum::debug_handler]
async fn find_network(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let network = state
        .find_network_use_case
        .execute(&key)
        .await?
        .ok_or_else(|| ApiError::not_found("Network", &key))?;

    Ok(Json(NetworkResponseDto::from(network.as_ref())))
}

/// GET /networks/:key/endpoints/:service - Preferred endpoint of a network
///
/// # Responses
///
/// * 200 OK - Endpoint selected
/// * 400 Bad Request - Unknown service
/// * 404 Not Found - Unknown network, or no endpoint for the service
/// * 503 Service Unavailable - No registry baseline
#[axum::debug_handler]
async fn preferred_endpoint(
    State(state): State<AppState>,
    Path((key, service)): Path<(String, String)>,
) -> Result<Json<PreferredEndpointResponseDto>, ApiError> {
    let service: ServiceKind = service.parse()?;

    match state.get_preferred_endpoint_use_case.execute(&key, service).await? {
        PreferredEndpoint::Found {
            network_id,
            service,
            endpoint,
        } => Ok(Json(PreferredEndpointResponseDto {
            network_id: network_id.to_string(),
            service: service.to_string(),
            endpoint,
        })),
        PreferredEndpoint::NoEndpoint { network_id, service } => {
            Err(ApiError::not_found("Endpoint", format!("{network_id}/{service}")))
        }
        PreferredEndpoint::UnknownNetwork => Err(ApiError::not_found("Network", key)),
    }
}
