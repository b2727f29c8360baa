//! Lookup Handlers
//!
//! HTTP handlers identifying a network from chain data.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::service::ServiceKind;
use crate::infrastructure::driving_adapters::api_rest::dto::network::{
    EndpointQuery, FirstStreamableBlockQuery, NetworkResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for lookup endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/first-streamable-block", get(find_by_first_streamable_block))
        .route("/endpoint", get(find_by_endpoint))
}

/// GET /lookup/first-streamable-block?height=&hash= - Identify a chain by its first block
///
/// # Responses
///
/// * 200 OK - Network found
/// * 400 Bad Request - Invalid query
/// * 404 Not Found - No network has that first streamable block
#[axum::debug_handler]
async fn find_by_first_streamable_block(
    State(state): State<AppState>,
    Query(query): Query<FirstStreamableBlockQuery>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    query.validate()?;

    let network = state
        .find_by_first_streamable_block_use_case
        .execute(query.height, &query.hash)
        .await?
        .ok_or_else(|| ApiError::not_found("Network with first streamable block", format!("{}/{}", query.height, query.hash)))?;

    Ok(Json(NetworkResponseDto::from(network.as_ref())))
}

/// GET /lookup/endpoint?service=&endpoint= - Identify a chain by one of its endpoints
///
/// # Responses
///
/// * 200 OK - Network found
/// * 400 Bad Request - Invalid query or unknown service
/// * 404 Not Found - No network advertises that endpoint
#[axum::debug_handler]
async fn find_by_endpoint(
    State(state): State<AppState>,
    Query(query): Query<EndpointQuery>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    query.validate()?;
    let service: ServiceKind = query.service.parse()?;

    let network = state
        .find_by_endpoint_use_case
        .execute(service, &query.endpoint)
        .await?
        .ok_or_else(|| ApiError::not_found("Network with endpoint", &query.endpoint))?;

    Ok(Json(NetworkResponseDto::from(network.as_ref())))
}
