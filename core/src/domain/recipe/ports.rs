use std::future::Future;

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recommendation, value_objects::GetRecommendationsInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    fn get_recommendations(
        &self,
        input: GetRecommendationsInput,
    ) -> impl Future<Output = Result<Vec<Recommendation>, CoreError>> + Send;
}

/// Third-party recipe search.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSource: Send + Sync {
    /// Searches recipes using a comma-separated ingredient list and returns the
    /// raw response body. `number` bounds the result count.
    fn search_recipes(
        &self,
        ingredients: &str,
        number: u32,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;
}
