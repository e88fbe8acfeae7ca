use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_user::{__path_get_user, get_user};
use super::handlers::get_user_votes::{__path_get_user_votes, get_user_votes};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_user, get_user_votes))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/user", state.args.server.root_path), get(get_user))
        .route(
            &format!("{}/user/votes", state.args.server.root_path),
            get(get_user_votes),
        )
}
