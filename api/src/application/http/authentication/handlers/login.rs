use axum::extract::State;
use spoonderful_core::domain::{
    authentication::{entities::AuthenticateInput, ports::AuthService},
    jwt::entities::JwtToken,
};

use crate::application::http::authentication::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateForm};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/login",
    tag = "authentication",
    summary = "Log in",
    description = "OAuth2 password flow. Use the registered email as `username`.",
    request_body(content = LoginValidator, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, body = JwtToken),
        (status = 403, description = "Invalid Credentials.")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateForm(form): ValidateForm<LoginValidator>,
) -> Result<Response<JwtToken>, ApiError> {
    let token = state
        .service
        .authenticate(AuthenticateInput {
            email: form.username,
            password: form.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(token))
}
