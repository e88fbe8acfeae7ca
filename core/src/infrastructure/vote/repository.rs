use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        vote::{entities::Vote, ports::VoteRepository},
    },
    entity::likes::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresVoteRepository {
    pub db: DatabaseConnection,
}

impl PostgresVoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl VoteRepository for PostgresVoteRepository {
    async fn get_vote(&self, user_id: Uuid, recipe_id: i64) -> Result<Option<Vote>, CoreError> {
        let vote = Entity::find_by_id((user_id, recipe_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get vote: {}", e);
                CoreError::InternalServerError
            })?;

        vote.map(Vote::try_from).transpose()
    }

    async fn create_vote(&self, vote: Vote) -> Result<Vote, CoreError> {
        let active_model = ActiveModel {
            user_id: Set(vote.user_id),
            recipe_id: Set(vote.recipe_id),
            direction: Set(vote.direction.as_str().to_string()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                    return CoreError::AlreadyExists;
                }
                error!("Failed to create vote: {}", e);
                CoreError::InternalServerError
            })?;

        Vote::try_from(created)
    }

    async fn update_vote(&self, vote: Vote) -> Result<Vote, CoreError> {
        let active_model = ActiveModel {
            user_id: Set(vote.user_id),
            recipe_id: Set(vote.recipe_id),
            direction: Set(vote.direction.as_str().to_string()),
        };

        let updated = Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update vote: {}", e);
                CoreError::InternalServerError
            })?;

        Vote::try_from(updated)
    }

    async fn delete_vote(&self, user_id: Uuid, recipe_id: i64) -> Result<(), CoreError> {
        Entity::delete_by_id((user_id, recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete vote: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }

    async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<Vote>, CoreError> {
        let votes = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get votes for user: {}", e);
                CoreError::InternalServerError
            })?;

        votes.into_iter().map(Vote::try_from).collect()
    }
}
