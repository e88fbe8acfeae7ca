use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WelcomeResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    summary = "Welcome",
    responses(
        (status = 200, body = WelcomeResponse)
    )
)]
pub async fn root() -> Response<WelcomeResponse> {
    Response::OK(WelcomeResponse {
        message: "Welcome to Spoonderful! Visit /swagger-ui to browse the API.".to_string(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(root))]
pub struct RootApiDoc;

pub fn root_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/", root_path), get(root))
}
