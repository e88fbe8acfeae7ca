use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::vote::entities::Direction;

#[derive(Debug, Clone)]
pub struct CastVoteInput {
    pub recipe_id: i64,
    pub direction: Direction,
}

/// What casting a vote did to the stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoteOutcome {
    Added,
    Removed,
    Changed,
}

impl VoteOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            VoteOutcome::Added => "Successfully added vote.",
            VoteOutcome::Removed => "Successfully removed vote.",
            VoteOutcome::Changed => "Successfully changed vote.",
        }
    }
}
