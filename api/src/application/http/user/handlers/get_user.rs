use axum::extract::State;
use spoonderful_core::domain::user::{entities::User, ports::UserService};

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "",
    tag = "user",
    summary = "Current user",
    description = "Returns the account of the signed-in user.",
    security(("bearer" = [])),
    responses(
        (status = 200, body = User),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .get_current_user(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(user))
}
