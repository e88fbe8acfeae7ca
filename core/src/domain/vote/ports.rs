use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    vote::{
        entities::Vote,
        value_objects::{CastVoteInput, VoteOutcome},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait VoteService: Send + Sync {
    /// Adds, removes (same direction again) or switches (opposite direction) a vote.
    fn cast_vote(
        &self,
        identity: Identity,
        input: CastVoteInput,
    ) -> impl Future<Output = Result<VoteOutcome, CoreError>> + Send;

    fn get_user_votes(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<Vote>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait VoteRepository: Send + Sync {
    fn get_vote(
        &self,
        user_id: Uuid,
        recipe_id: i64,
    ) -> impl Future<Output = Result<Option<Vote>, CoreError>> + Send;

    /// Fails with [`CoreError::AlreadyExists`] when the user already voted on the recipe.
    fn create_vote(&self, vote: Vote) -> impl Future<Output = Result<Vote, CoreError>> + Send;

    fn update_vote(&self, vote: Vote) -> impl Future<Output = Result<Vote, CoreError>> + Send;

    fn delete_vote(
        &self,
        user_id: Uuid,
        recipe_id: i64,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_by_user(&self, user_id: Uuid)
    -> impl Future<Output = Result<Vec<Vote>, CoreError>> + Send;
}
