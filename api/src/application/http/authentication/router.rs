use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::login::{__path_login, login};
use super::handlers::register::{__path_register_user, register_user};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(register_user, login))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/register", root_path), post(register_user))
        .route(&format!("{}/login", root_path), post(login))
}
