use axum::extract::State;
use axum::routing::get;
use axum::Router;
use larder_core::domain::health::entities::DatabaseHealthStatus;
use larder_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub latency_ms: u64,
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health"), get(health))
        .route(&format!("{root_path}/health/ready"), get(ready))
}

async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let latency_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        latency_ms,
    }))
}

async fn ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
