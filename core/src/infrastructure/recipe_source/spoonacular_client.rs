use reqwest::{Client, header::HeaderMap};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::domain::{
    common::{RecipeSourceConfig, entities::app_errors::CoreError},
    recipe::ports::RecipeSource,
};

const COMPLEX_SEARCH_ENDPOINT: &str = "recipes/complexSearch";

const RATE_LIMIT_HEADERS: [&str; 6] = [
    "X-Ratelimit-Classifications-Limit",
    "X-Ratelimit-Classifications-Remaining",
    "X-Ratelimit-Requests-Limit",
    "X-Ratelimit-Requests-Remaining",
    "X-Ratelimit-Tinyrequests-Limit",
    "X-Ratelimit-Tinyrequests-Remaining",
];

/// Spoonacular recipe search through RapidAPI.
#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    base_url: String,
    host: String,
    api_key: String,
    client: Client,
}

impl SpoonacularClient {
    pub fn new(config: &RecipeSourceConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            host: config.host.clone(),
            api_key: config.api_key.clone(),
            client: Client::new(),
        }
    }

    fn complex_search_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            COMPLEX_SEARCH_ENDPOINT
        )
    }
}

/// Query of a complex search ordered by fewest missing ingredients, with
/// nutrition and instructions inlined.
fn complex_search_query(ingredients: &str, number: u32) -> Vec<(&'static str, String)> {
    vec![
        ("includeIngredients", ingredients.to_string()),
        ("sort", "min-missing-ingredients".to_string()),
        ("instructionsRequired", "true".to_string()),
        ("fillIngredients", "false".to_string()),
        ("addRecipeNutrition", "true".to_string()),
        ("ignorePantry", "true".to_string()),
        ("number", number.to_string()),
    ]
}

fn log_rate_limits(headers: &HeaderMap) {
    for name in RATE_LIMIT_HEADERS {
        if let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) {
            debug!(header = name, value, "spoonacular rate limit");
        }
    }
}

impl RecipeSource for SpoonacularClient {
    async fn search_recipes(&self, ingredients: &str, number: u32) -> Result<Value, CoreError> {
        let response = self
            .client
            .get(self.complex_search_url())
            .query(&complex_search_query(ingredients, number))
            .header("x-rapidapi-host", &self.host)
            .header("x-rapidapi-key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!("Spoonacular request failed: {}", e);
                CoreError::ExternalServiceError(format!("recipe search failed: {}", e))
            })?;

        let status = response.status();
        info!(status = status.as_u16(), "spoonacular complex search");
        log_rate_limits(response.headers());

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Spoonacular API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "recipe search returned {}",
                status
            )));
        }

        response.json::<Value>().await.map_err(|e| {
            error!("Failed to parse Spoonacular response: {}", e);
            CoreError::ExternalServiceError(format!("invalid recipe search response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> SpoonacularClient {
        SpoonacularClient::new(&RecipeSourceConfig {
            base_url: base_url.to_string(),
            host: "spoonacular-recipe-food-nutrition-v1.p.rapidapi.com".to_string(),
            api_key: "key".to_string(),
        })
    }

    #[test]
    fn endpoint_is_joined_with_a_single_slash() {
        assert_eq!(
            client("https://example.test/").complex_search_url(),
            "https://example.test/recipes/complexSearch"
        );
        assert_eq!(
            client("https://example.test").complex_search_url(),
            "https://example.test/recipes/complexSearch"
        );
    }

    #[test]
    fn query_asks_for_nutrition_and_fewest_missing_ingredients() {
        let query = complex_search_query("eggs,milk", 100);

        assert!(query.contains(&("includeIngredients", "eggs,milk".to_string())));
        assert!(query.contains(&("sort", "min-missing-ingredients".to_string())));
        assert!(query.contains(&("addRecipeNutrition", "true".to_string())));
        assert!(query.contains(&("number", "100".to_string())));
    }
}
