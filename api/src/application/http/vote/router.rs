use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::cast_vote::{__path_cast_vote, cast_vote};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(cast_vote))]
pub struct VoteApiDoc;

pub fn vote_routes(state: AppState) -> Router<AppState> {
    Router::new().route(&format!("{}/vote", state.args.server.root_path), post(cast_vote))
}
