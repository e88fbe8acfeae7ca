use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use spoonderful_core::domain::authentication::{
    entities::AuthorizeRequestInput, ports::AuthService, value_objects::Identity,
};
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("Not authenticated".to_string()))?;

    Ok(bearer.token().to_string())
}

/// Caller identity resolved from the `Authorization: Bearer` header.
///
/// Rejects with 401 and a `WWW-Authenticate: Bearer` challenge when the header
/// is missing, the token does not verify, or its user no longer exists.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        let token = extract_token_from_bearer(parts).await?;
        let app_state = AppState::from_ref(state);

        let output = app_state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
            .map_err(|e| {
                debug!("Rejected bearer token: {}", e);
                ApiError::from(e)
            })?;

        parts.extensions.insert(output.identity.clone());

        Ok(RequiredIdentity(output.identity))
    }
}
