use axum::extract::State;
use serde::{Deserialize, Serialize};
use spoonderful_core::domain::health::ports::HealthCheckService;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    pub status: String,
    pub database_ping_ms: u64,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness",
    responses(
        (status = 200, body = LivenessResponse)
    )
)]
pub async fn health_live(
    State(state): State<AppState>,
) -> Result<Response<LivenessResponse>, ApiError> {
    let database_ping_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(LivenessResponse {
        status: "ok".to_string(),
        database_ping_ms,
    }))
}
