use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SpoonderfulConfig {
    pub database: DatabaseConfig,
    pub recipe_source: RecipeSourceConfig,
    pub auth: AuthConfig,
    pub recommendation: RecommendationConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct RecipeSourceConfig {
    pub base_url: String,
    pub host: String,
    pub api_key: String,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub secret_key: String,
    pub signing_algorithm: String,
    pub access_token_duration_minutes: i64,
}

/// Tunables of the recommendation routes.
#[derive(Clone, Debug)]
pub struct RecommendationConfig {
    /// Highest `missedIngredientCount` a candidate may have.
    pub missed_ingredient_tolerance: u32,
    pub simple_candidate_count: u32,
    pub varied_candidate_count: u32,
    /// k-means seed. Cluster count and PCA width are fixed by `ClusteringParams`.
    pub seed: u64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            missed_ingredient_tolerance: 2,
            simple_candidate_count: 5,
            varied_candidate_count: 100,
            seed: 42,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
