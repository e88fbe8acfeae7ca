use axum::extract::State;
use spoonderful_core::domain::user::{
    entities::User, ports::UserService, value_objects::RegisterUserInput,
};

use crate::application::http::authentication::validators::RegisterValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/register",
    tag = "authentication",
    summary = "Sign up",
    description = "Creates an account. The email is the login name and must be unique.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = User),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .register_user(RegisterUserInput {
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(user))
}
