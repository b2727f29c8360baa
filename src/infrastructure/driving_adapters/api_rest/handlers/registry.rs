//! Registry Handlers
//!
//! Status of the registry snapshot being served.

use axum::{extract::State, routing::get, Json, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::network::RegistryStatusResponseDto;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for registry endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(registry_status))
}

/// GET /registry/status - Origin, load time and size of the current snapshot
#[axum::debug_handler]
async fn registry_status(State(state): State<AppState>) -> Result<Json<RegistryStatusResponseDto>, ApiError> {
    let status = state.get_registry_status_use_case.execute().await?;
    Ok(Json(RegistryStatusResponseDto::from(status)))
}
