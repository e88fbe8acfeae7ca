use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `Simple` returns the best few matches as-is, `Varied` fetches a larger
/// batch and clusters it to pick diverse recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMode {
    Simple,
    Varied,
}

#[derive(Debug, Clone)]
pub struct GetRecommendationsInput {
    /// Comma-separated ingredient list.
    pub ingredients: String,
    pub mode: RecommendationMode,
}
