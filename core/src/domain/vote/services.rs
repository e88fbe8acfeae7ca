use tracing::debug;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    jwt::ports::TokenSigner,
    recipe::ports::RecipeSource,
    user::ports::UserRepository,
    vote::{
        entities::Vote,
        ports::{VoteRepository, VoteService},
        value_objects::{CastVoteInput, VoteOutcome},
    },
};

impl<U, V, H, T, RS, HC> VoteService for Service<U, V, H, T, RS, HC>
where
    U: UserRepository,
    V: VoteRepository,
    H: HasherRepository,
    T: TokenSigner,
    RS: RecipeSource,
    HC: HealthCheckRepository,
{
    async fn cast_vote(
        &self,
        identity: Identity,
        input: CastVoteInput,
    ) -> Result<VoteOutcome, CoreError> {
        let existing = self
            .vote_repository
            .get_vote(identity.id(), input.recipe_id)
            .await?;

        let outcome = match existing {
            Some(vote) if vote.direction == input.direction => {
                self.vote_repository
                    .delete_vote(identity.id(), input.recipe_id)
                    .await?;
                VoteOutcome::Removed
            }
            Some(_) => {
                self.vote_repository
                    .update_vote(Vote::new(identity.id(), input.recipe_id, input.direction))
                    .await?;
                VoteOutcome::Changed
            }
            None => {
                let vote = Vote::new(identity.id(), input.recipe_id, input.direction);
                match self.vote_repository.create_vote(vote.clone()).await {
                    Ok(_) => {}
                    // a concurrent first vote got in between the read and the insert
                    Err(CoreError::AlreadyExists) => {
                        self.vote_repository.update_vote(vote).await?;
                    }
                    Err(e) => return Err(e),
                }
                VoteOutcome::Added
            }
        };

        debug!(
            user_id = %identity.id(),
            recipe_id = input.recipe_id,
            direction = input.direction.as_str(),
            ?outcome,
            "vote cast"
        );

        Ok(outcome)
    }

    async fn get_user_votes(&self, identity: Identity) -> Result<Vec<Vote>, CoreError> {
        self.vote_repository.get_by_user(identity.id()).await
    }
}
