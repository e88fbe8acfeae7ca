use crate::domain::{
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenSigner,
    recipe::ports::RecipeSource,
    user::ports::UserRepository,
    vote::ports::VoteRepository,
};
use crate::domain::common::RecommendationConfig;

/// Aggregate service; each domain implements its service trait on it.
#[derive(Clone)]
pub struct Service<U, V, H, T, RS, HC>
where
    U: UserRepository,
    V: VoteRepository,
    H: HasherRepository,
    T: TokenSigner,
    RS: RecipeSource,
    HC: HealthCheckRepository,
{
    pub(crate) user_repository: U,
    pub(crate) vote_repository: V,
    pub(crate) hasher_repository: H,
    pub(crate) token_signer: T,
    pub(crate) recipe_source: RS,
    pub(crate) health_check_repository: HC,
    pub(crate) recommendation: RecommendationConfig,
    pub(crate) access_token_duration_minutes: i64,
}

impl<U, V, H, T, RS, HC> Service<U, V, H, T, RS, HC>
where
    U: UserRepository,
    V: VoteRepository,
    H: HasherRepository,
    T: TokenSigner,
    RS: RecipeSource,
    HC: HealthCheckRepository,
{
    pub fn new(
        user_repository: U,
        vote_repository: V,
        hasher_repository: H,
        token_signer: T,
        recipe_source: RS,
        health_check_repository: HC,
        recommendation: RecommendationConfig,
        access_token_duration_minutes: i64,
    ) -> Self {
        Self {
            user_repository,
            vote_repository,
            hasher_repository,
            token_signer,
            recipe_source,
            health_check_repository,
            recommendation,
            access_token_duration_minutes,
        }
    }
}
