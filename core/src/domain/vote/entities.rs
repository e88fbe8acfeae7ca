use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Like or dislike of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Dislike,
    Like,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Dislike => "dislike",
            Direction::Like => "like",
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dislike" => Ok(Direction::Dislike),
            "like" => Ok(Direction::Like),
            other => Err(format!("unknown vote direction '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Vote {
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub recipe_id: i64,
    pub direction: Direction,
}

impl Vote {
    pub fn new(user_id: Uuid, recipe_id: i64, direction: Direction) -> Self {
        Self {
            user_id,
            recipe_id,
            direction,
        }
    }
}
