use axum::extract::State;
use serde::{Deserialize, Serialize};
use spoonderful_core::domain::vote::{ports::VoteService, value_objects::CastVoteInput};
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::vote::validators::CastVoteValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CastVoteResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "",
    tag = "vote",
    summary = "Vote on a recipe",
    description = "Adds a vote, removes it when the same direction is sent again, or switches it when the opposite direction is sent. Recipe ids are not checked.",
    security(("bearer" = [])),
    request_body = CastVoteValidator,
    responses(
        (status = 201, body = CastVoteResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CastVoteValidator>,
) -> Result<Response<CastVoteResponse>, ApiError> {
    let outcome = state
        .service
        .cast_vote(
            identity,
            CastVoteInput {
                recipe_id: payload.recipe_id,
                direction: payload.direction,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CastVoteResponse {
        message: outcome.message().to_string(),
    }))
}
