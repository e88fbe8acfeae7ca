use serde::{Deserialize, Serialize};
use spoonderful_core::domain::vote::entities::Direction;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CastVoteValidator {
    pub recipe_id: i64,
    pub direction: Direction,
}
