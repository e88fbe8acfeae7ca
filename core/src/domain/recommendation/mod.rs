use thiserror::Error;

use crate::domain::{
    common::entities::app_errors::CoreError, recommendation::clustering::ClusteringError,
};

pub mod clustering;
pub mod pipeline;
pub mod preparation;
pub mod selection;
pub mod tabulation;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("no recipes left after filtering")]
    NoRecipes,

    #[error(transparent)]
    Clustering(#[from] ClusteringError),
}

impl From<PipelineError> for CoreError {
    fn from(error: PipelineError) -> Self {
        match error {
            PipelineError::NoRecipes => CoreError::NoRecipesFound,
            other => CoreError::PipelineError(other.to_string()),
        }
    }
}
