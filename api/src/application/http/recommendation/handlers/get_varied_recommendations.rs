use std::collections::BTreeMap;

use axum::extract::{Query, State};
use spoonderful_core::domain::recipe::{
    entities::Recommendation,
    ports::RecommendationService,
    value_objects::{GetRecommendationsInput, RecommendationMode},
};

use super::{RecommendationMap, RecommendationQuery, by_recipe_id};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/varied",
    tag = "recipes",
    summary = "Varied recommendations",
    description = "Clusters a larger batch of matching recipes and returns the one closest to the centre of each cluster.",
    params(RecommendationQuery),
    responses(
        (status = 200, body = BTreeMap<i64, Recommendation>),
        (status = 404, description = "No recipes found for the provided ingredients")
    )
)]
pub async fn get_varied_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Response<RecommendationMap>, ApiError> {
    let recommendations = state
        .service
        .get_recommendations(GetRecommendationsInput {
            ingredients: query.ingredients,
            mode: RecommendationMode::Varied,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(by_recipe_id(recommendations)))
}
