use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::get_simple_recommendations::{
    __path_get_simple_recommendations, get_simple_recommendations,
};
use super::handlers::get_varied_recommendations::{
    __path_get_varied_recommendations, get_varied_recommendations,
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_simple_recommendations, get_varied_recommendations))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recommendations/simple", state.args.server.root_path),
            get(get_simple_recommendations),
        )
        .route(
            &format!("{}/recommendations/varied", state.args.server.root_path),
            get(get_varied_recommendations),
        )
}
