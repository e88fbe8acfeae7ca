use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One candidate recipe as returned by the recipe source.
///
/// Kept as the raw JSON object: the set of nutrients differs from recipe to
/// recipe, and the tabulation stage decides which keys become columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeRecord(Map<String, Value>);

impl RecipeRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn missed_ingredient_count(&self) -> Option<u64> {
        self.0.get("missedIngredientCount").and_then(Value::as_u64)
    }

    /// The `nutrition` sub-object, `Null` when absent.
    pub fn nutrition(&self) -> &Value {
        self.0.get("nutrition").unwrap_or(&Value::Null)
    }

    /// The `analyzedInstructions` list, `Null` when absent.
    pub fn analyzed_instructions(&self) -> &Value {
        self.0.get("analyzedInstructions").unwrap_or(&Value::Null)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Map<String, Value>> for RecipeRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// A recipe as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    #[serde(skip_serializing)]
    pub id: i64,
    pub name: String,
    pub image: String,
    pub instructions: String,
    pub time_minutes: i64,
}
