use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    jwt::ports::TokenSigner,
    recipe::ports::RecipeSource,
    user::ports::UserRepository,
    vote::ports::VoteRepository,
};

impl<U, V, H, T, RS, HC> HealthCheckService for Service<U, V, H, T, RS, HC>
where
    U: UserRepository,
    V: VoteRepository,
    H: HasherRepository,
    T: TokenSigner,
    RS: RecipeSource,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}
