use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("No recipes found for the provided ingredients")]
    NoRecipesFound,

    #[error("Already exists")]
    AlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Hash password error: {0}")]
    HashPasswordError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Recommendation pipeline error: {0}")]
    PipelineError(String),

    #[error("Internal server error")]
    InternalServerError,
}
