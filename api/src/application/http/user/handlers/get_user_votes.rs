use axum::extract::State;
use spoonderful_core::domain::vote::{entities::Vote, ports::VoteService};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/votes",
    tag = "user",
    summary = "Current user's votes",
    description = "Lists the recipe ids the signed-in user liked or disliked.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = Vec<Vote>),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_user_votes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<Vec<Vote>>, ApiError> {
    let votes = state
        .service
        .get_user_votes(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(votes))
}
