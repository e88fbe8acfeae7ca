use tracing::{debug, warn};

use crate::domain::{
    authentication::{
        entities::{AuthenticateInput, AuthorizeRequestInput, AuthorizeRequestOutput},
        ports::AuthService,
        value_objects::Identity,
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::{
        entities::{JwtClaim, JwtToken},
        ports::TokenSigner,
    },
    recipe::ports::RecipeSource,
    user::ports::UserRepository,
    vote::ports::VoteRepository,
};

impl<U, V, H, T, RS, HC> AuthService for Service<U, V, H, T, RS, HC>
where
    U: UserRepository,
    V: VoteRepository,
    H: HasherRepository,
    T: TokenSigner,
    RS: RecipeSource,
    HC: HealthCheckRepository,
{
    async fn authenticate(&self, input: AuthenticateInput) -> Result<JwtToken, CoreError> {
        let email = input.email.trim().to_lowercase();

        let user = self
            .user_repository
            .get_by_email(&email)
            .await?
            .ok_or_else(|| {
                debug!("login attempt for unknown email");
                CoreError::InvalidCredentials
            })?;

        let verified = self
            .hasher_repository
            .verify_password(&input.password, &user.password_hash)
            .await?;

        if !verified {
            warn!(user_id = %user.id, "login attempt with wrong password");
            return Err(CoreError::InvalidCredentials);
        }

        let claim = JwtClaim::new(user.id, self.access_token_duration_minutes);
        let access_token = self.token_signer.sign(&claim)?;

        Ok(JwtToken::bearer(access_token))
    }

    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claim = self.token_signer.verify(&input.token)?;

        let user = self
            .user_repository
            .get_by_id(claim.user_id)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(AuthorizeRequestOutput {
            identity: Identity::from(&user),
        })
    }
}
