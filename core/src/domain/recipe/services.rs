use tracing::{debug, info};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenSigner,
    recipe::{
        entities::Recommendation,
        ports::{RecipeSource, RecommendationService},
        retrieval::retrieve_candidates,
        value_objects::{GetRecommendationsInput, RecommendationMode},
    },
    recommendation::{clustering::ClusteringParams, pipeline::recommend},
    user::ports::UserRepository,
    vote::ports::VoteRepository,
};

impl<U, V, H, T, RS, HC> RecommendationService for Service<U, V, H, T, RS, HC>
where
    U: UserRepository,
    V: VoteRepository,
    H: HasherRepository,
    T: TokenSigner,
    RS: RecipeSource,
    HC: HealthCheckRepository,
{
    async fn get_recommendations(
        &self,
        input: GetRecommendationsInput,
    ) -> Result<Vec<Recommendation>, CoreError> {
        let ingredients = input.ingredients.trim();
        if ingredients.is_empty() {
            return Err(CoreError::Invalid(
                "at least one ingredient is required".to_string(),
            ));
        }

        let number = match input.mode {
            RecommendationMode::Simple => self.recommendation.simple_candidate_count,
            RecommendationMode::Varied => self.recommendation.varied_candidate_count,
        };

        let response = self.recipe_source.search_recipes(ingredients, number).await?;
        let candidates =
            retrieve_candidates(&response, self.recommendation.missed_ingredient_tolerance);
        debug!(
            requested = number,
            candidates = candidates.len(),
            tolerance = self.recommendation.missed_ingredient_tolerance,
            "filtered recipe candidates"
        );

        let params = ClusteringParams::from(&self.recommendation);
        let recommendations = recommend(&candidates, &params, input.mode)?;

        info!(
            mode = ?input.mode,
            count = recommendations.len(),
            "built recommendations"
        );
        Ok(recommendations)
    }
}
