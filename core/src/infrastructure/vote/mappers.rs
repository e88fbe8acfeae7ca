use tracing::error;

use crate::{
    domain::{common::entities::app_errors::CoreError, vote::entities::Vote},
    entity::likes,
};

impl TryFrom<likes::Model> for Vote {
    type Error = CoreError;

    fn try_from(model: likes::Model) -> Result<Self, Self::Error> {
        let direction = model.direction.parse().map_err(|e| {
            error!("Stored vote has an invalid direction: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            user_id: model.user_id,
            recipe_id: model.recipe_id,
            direction,
        })
    }
}
