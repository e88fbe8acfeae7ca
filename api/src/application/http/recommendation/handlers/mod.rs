pub mod get_simple_recommendations;
pub mod get_varied_recommendations;

use std::collections::BTreeMap;

use serde::Deserialize;
use spoonderful_core::domain::recipe::entities::Recommendation;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecommendationQuery {
    /// Comma-separated ingredients, e.g. `eggs,spinach,feta`.
    pub ingredients: String,
}

/// Recommendations keyed by recipe id. A recipe picked twice appears once.
pub type RecommendationMap = BTreeMap<i64, Recommendation>;

pub(crate) fn by_recipe_id(recommendations: Vec<Recommendation>) -> RecommendationMap {
    recommendations.into_iter().map(|r| (r.id, r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(id: i64, name: &str) -> Recommendation {
        Recommendation {
            id,
            name: name.to_string(),
            image: String::new(),
            instructions: String::new(),
            time_minutes: 10,
        }
    }

    #[test]
    fn repeated_recipes_collapse_into_one_entry() {
        let map = by_recipe_id(vec![
            recommendation(3, "Soup"),
            recommendation(1, "Salad"),
            recommendation(3, "Soup"),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map[&1].name, "Salad");
    }

    #[test]
    fn id_is_the_key_not_a_field() {
        let json = serde_json::to_value(by_recipe_id(vec![recommendation(42, "Stew")])).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "42": { "name": "Stew", "image": "", "instructions": "", "time_minutes": 10 }
            })
        );
    }
}
