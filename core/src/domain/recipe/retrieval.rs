use serde_json::{Map, Value};

use crate::domain::recipe::entities::RecipeRecord;

/// Fields kept from each complex-search result.
pub const RECIPE_FIELDS: [&str; 16] = [
    "id",
    "title",
    "image",
    "analyzedInstructions",
    "readyInMinutes",
    "spoonacularScore",
    "aggregateLikes",
    "healthScore",
    "pricePerServing",
    "servings",
    "nutrition",
    "usedIngredientCount",
    "vegetarian",
    "vegan",
    "glutenFree",
    "dairyFree",
];

/// Sub-structures that are flattened by the tabulators instead of being copied.
pub const NESTED_FIELDS: [&str; 2] = ["nutrition", "analyzedInstructions"];

/// Extracts the candidates of a complex-search response.
///
/// Recipes missing more than `tolerance` ingredients, or not reporting the
/// count at all, are dropped. The kept recipes are projected onto
/// [`RECIPE_FIELDS`]; a field the source left out becomes `null`.
pub fn retrieve_candidates(response: &Value, tolerance: u32) -> Vec<RecipeRecord> {
    let Some(results) = response.get("results").and_then(Value::as_array) else {
        return Vec::new();
    };

    results
        .iter()
        .filter(|recipe| {
            recipe
                .get("missedIngredientCount")
                .and_then(Value::as_u64)
                .is_some_and(|missed| missed <= u64::from(tolerance))
        })
        .map(|recipe| {
            let fields: Map<String, Value> = RECIPE_FIELDS
                .iter()
                .map(|field| {
                    let value = recipe.get(*field).cloned().unwrap_or(Value::Null);
                    (field.to_string(), value)
                })
                .collect();
            RecipeRecord::new(fields)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(missed: &[Option<u64>]) -> Value {
        let results: Vec<Value> = missed
            .iter()
            .enumerate()
            .map(|(i, m)| match m {
                Some(m) => json!({ "id": i, "title": format!("r{i}"), "missedIngredientCount": m }),
                None => json!({ "id": i, "title": format!("r{i}") }),
            })
            .collect();
        json!({ "results": results, "totalResults": results.len() })
    }

    #[test]
    fn keeps_exactly_the_recipes_within_tolerance() {
        let records = retrieve_candidates(&response(&[Some(0), Some(1), Some(3), Some(2)]), 2);

        let ids: Vec<i64> = records.iter().filter_map(RecipeRecord::id).collect();
        assert_eq!(ids, vec![0, 1, 3]);
    }

    #[test]
    fn zero_tolerance_requires_every_ingredient() {
        let records = retrieve_candidates(&response(&[Some(0), Some(1)]), 0);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), Some(0));
    }

    #[test]
    fn unknown_missed_count_is_not_eligible() {
        let records = retrieve_candidates(&response(&[None, Some(0)]), 2);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), Some(1));
    }

    #[test]
    fn projection_fills_absent_fields_with_null() {
        let records = retrieve_candidates(&response(&[Some(0)]), 2);

        assert_eq!(records[0].get("image"), Some(&Value::Null));
        assert_eq!(records[0].get("missedIngredientCount"), None);
        assert!(records[0].nutrition().is_null());
    }

    #[test]
    fn response_without_results_yields_nothing() {
        assert!(retrieve_candidates(&json!({ "message": "quota exceeded" }), 2).is_empty());
        assert!(retrieve_candidates(&Value::Null, 2).is_empty());
    }
}
