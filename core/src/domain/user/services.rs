use tracing::info;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenSigner,
    recipe::ports::RecipeSource,
    user::{
        entities::User,
        ports::{UserRepository, UserService},
        value_objects::RegisterUserInput,
    },
    vote::ports::VoteRepository,
};

impl<U, V, H, T, RS, HC> UserService for Service<U, V, H, T, RS, HC>
where
    U: UserRepository,
    V: VoteRepository,
    H: HasherRepository,
    T: TokenSigner,
    RS: RecipeSource,
    HC: HealthCheckRepository,
{
    async fn register_user(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        let email = input.email.trim().to_lowercase();

        let password_hash = self
            .hasher_repository
            .hash_password(&input.password)
            .await?;

        let user = self
            .user_repository
            .create_user(User::new(email, password_hash))
            .await?;

        info!(user_id = %user.id, "registered user");
        Ok(user)
    }

    async fn get_current_user(&self, identity: Identity) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(identity.user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{fake_service, identity_for};

    #[tokio::test]
    async fn register_normalizes_email_and_hashes_password() {
        let service = fake_service();

        let user = service
            .register_user(RegisterUserInput {
                email: "  Cook@Example.com ".to_string(),
                password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.email, "cook@example.com");
        assert_eq!(user.password_hash, "hashed:hunter2");
    }

    #[tokio::test]
    async fn register_twice_is_a_conflict() {
        let service = fake_service();
        let input = RegisterUserInput {
            email: "cook@example.com".to_string(),
            password: "pw".to_string(),
        };

        service.register_user(input.clone()).await.unwrap();
        let err = service.register_user(input).await.unwrap_err();

        assert_eq!(err, CoreError::AlreadyExists);
    }

    #[tokio::test]
    async fn current_user_must_still_exist() {
        let service = fake_service();
        let ghost = User::new("ghost@example.com".to_string(), "x".to_string());

        let err = service
            .get_current_user(identity_for(&ghost))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }
}
